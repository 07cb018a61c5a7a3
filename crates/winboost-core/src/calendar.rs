//! Month grid arithmetic for the calendar screen.
//!
//! Weeks start on Sunday. Task days are UTC calendar days of `due_date`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::task::Task;
use crate::views::tasks_on_day;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    /// 1..=12
    month: u32,
}

impl MonthCursor {
    /// `None` unless `month` is 1..=12 and the year is representable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// "March 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Number of blank cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Day numbers of the previous month that fill the leading blanks.
    pub fn leading_filler_days(&self) -> Vec<u32> {
        let blanks = self.leading_blanks();
        let prev_len = self.previous().days_in_month();
        (prev_len + 1 - blanks..=prev_len).collect()
    }

    /// The date of `day` in this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// One day cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub task_count: usize,
    pub has_completed: bool,
}

/// Cells for every day of `month`, flagged against `today` and `selected`.
pub fn month_grid(month: MonthCursor, tasks: &[Task], today: NaiveDate, selected: u32) -> Vec<DayCell> {
    (1..=month.days_in_month())
        .filter_map(|day| {
            let date = month.date(day)?;
            let due = tasks_on_day(tasks, date);
            Some(DayCell {
                day,
                is_today: date == today,
                is_selected: day == selected,
                task_count: due.len(),
                has_completed: due.iter().any(|t| t.completed),
            })
        })
        .collect()
}
