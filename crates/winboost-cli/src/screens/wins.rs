use std::fmt::{self, Write};

use winboost_core::WinsView;

use crate::components::{heading, task_item};
use crate::session::Session;

pub fn render(out: &mut impl Write, session: &Session) -> fmt::Result {
    let state = session.store.state();
    let energy = state.current_energy_level;
    let view = WinsView::build(&state.tasks, energy, session.filter, &session.views);

    writeln!(out, "Filter: {}  (`filter all|pending|completed`)", view.filter)?;

    if !view.quick_wins.is_empty() {
        writeln!(out, "\n{}", heading("⭐ Quick Wins"))?;
        for task in &view.quick_wins {
            writeln!(out, "{}", task_item(task))?;
        }
    }

    if !view.energy_matches.is_empty() {
        writeln!(out, "\n{}", heading(&format!("🎯 Energy Matches (Level {energy})")))?;
        for task in &view.energy_matches {
            writeln!(out, "{}", task_item(task))?;
        }
    }

    writeln!(out, "\n{}", heading(view.filter.title()))?;
    if view.tasks.is_empty() {
        writeln!(out, "{}", view.filter.empty_message())?;
    }
    for task in &view.tasks {
        writeln!(out, "{}", task_item(task))?;
    }
    Ok(())
}
