use std::fmt::{self, Write};

use winboost_core::calendar::DAY_NAMES;
use winboost_core::month_grid;
use winboost_core::views::tasks_on_day;

use crate::components::{heading, task_item};
use crate::session::Session;

pub fn render(out: &mut impl Write, session: &Session) -> fmt::Result {
    let state = session.store.state();
    let cursor = session.calendar.cursor;

    writeln!(out, "◀ {} ▶   (`month prev|next|YYYY-MM`, `select <day>`)\n", cursor.title())?;
    writeln!(out, "{}", DAY_NAMES.map(|d| format!("{d:>5}")).concat())?;

    let mut line = String::new();
    for filler in cursor.leading_filler_days() {
        line.push_str(&format!("{:>5}", format!("{filler}·")));
    }

    let grid = month_grid(cursor, &state.tasks, session.today(), session.calendar.selected_day);
    for cell in &grid {
        // [n] selected, n* today, trailing mark for days with tasks.
        let mut label = if cell.is_selected {
            format!("[{}]", cell.day)
        } else if cell.is_today {
            format!("{}*", cell.day)
        } else {
            cell.day.to_string()
        };
        if cell.task_count > 0 {
            label.push(if cell.has_completed { '✓' } else { '•' });
        }
        line.push_str(&format!("{label:>5}"));
        if (cursor.leading_blanks() + cell.day) % 7 == 0 {
            writeln!(out, "{}", line.trim_end())?;
            line.clear();
        }
    }
    if !line.is_empty() {
        writeln!(out, "{}", line.trim_end())?;
    }

    match session.calendar.selected_date() {
        Some(date) => {
            writeln!(out, "\n{}", heading(&format!("Tasks for {}", date.format("%A, %B %-d"))))?;
            let due = tasks_on_day(&state.tasks, date);
            if due.is_empty() {
                writeln!(out, "No tasks scheduled for this day")?;
            }
            for task in due {
                writeln!(out, "{}", task_item(task))?;
            }
        }
        None => writeln!(out, "\nSelect a day to see its tasks")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winboost_core::{Config, MonthCursor};

    fn rendered(session: &Session) -> String {
        let mut out = String::new();
        render(&mut out, session).unwrap();
        out
    }

    #[test]
    fn today_lists_seed_tasks() {
        let session = Session::new(Config::default());
        let out = rendered(&session);
        assert!(out.contains(&session.calendar.cursor.title()));
        assert!(out.contains("Review morning emails"));
        assert!(out.contains("Take a 10-minute walk"));
    }

    #[test]
    fn other_month_has_no_tasks() {
        let mut session = Session::new(Config::default());
        session.calendar.cursor = MonthCursor::new(2001, 2).unwrap();
        session.calendar.selected_day = 14;
        let out = rendered(&session);
        assert!(out.contains("February 2001"));
        assert!(out.contains("Wednesday, February 14"));
        assert!(out.contains("No tasks scheduled for this day"));
    }
}
