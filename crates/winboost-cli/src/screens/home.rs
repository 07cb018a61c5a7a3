use std::fmt::{self, Write};

use winboost_core::theme::spacing;
use winboost_core::views::{available_rewards, energy_appropriate_task, todays_tasks};

use crate::components::{energy_bar, gap, heading, reward_item, rounded_card, task_item};
use crate::session::Session;

pub fn render(out: &mut impl Write, session: &Session) -> fmt::Result {
    let state = session.store.state();
    let user = &state.user;

    writeln!(out, "Welcome back, {}!", user.name)?;

    if user.shows_mood_banner() {
        let banner = rounded_card(&[
            "✨ New: Enhanced Mood Integration",
            "Track your daily mood and energy levels to get personalized task suggestions.",
            "`banner enable` to turn it on, `banner dismiss` to hide this.",
        ]);
        writeln!(out, "\n{banner}")?;
    }

    writeln!(out, "\n★ Current Points: {}  ({} wins achieved)", user.points, user.total_wins)?;

    writeln!(out, "\n{}", heading("Today's Wins"))?;
    writeln!(out, "{}", energy_bar(state.current_energy_level, session.color))?;
    let today = todays_tasks(&state.tasks, session.views.today_limit);
    if today.is_empty() {
        writeln!(out, "No tasks due today")?;
    }
    for task in today {
        writeln!(out, "{}", task_item(task))?;
    }

    writeln!(out, "\n{}", heading("Rewards Available"))?;
    for reward in available_rewards(&state.rewards, session.views.rewards_preview) {
        writeln!(out, "{}", reward_item(reward, user.points))?;
    }

    if let Some(next) = energy_appropriate_task(&state.tasks, state.current_energy_level) {
        writeln!(out, "\n{}", heading("Next Task"))?;
        writeln!(out, "{}", task_item(next))?;
        writeln!(
            out,
            "{}⚡ Matches your energy {}/10",
            gap(spacing::MD),
            state.current_energy_level
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winboost_core::{Action, Config};

    fn rendered(session: &Session) -> String {
        let mut out = String::new();
        render(&mut out, session).unwrap();
        out
    }

    #[test]
    fn seed_home_shows_banner_points_and_next_task() {
        let session = Session::new(Config::default());
        let out = rendered(&session);
        assert!(out.contains("Welcome back, Guest User!"));
        assert!(out.contains("╭"));
        assert!(out.contains("Enhanced Mood Integration"));
        assert!(out.contains("Current Points: 120"));
        assert!(out.contains("Review morning emails"));
        assert!(!out.contains("[x] Take a 10-minute walk"));
        assert!(out.contains("Matches your energy 6/10"));
    }

    #[test]
    fn banner_disappears_after_dismiss() {
        let mut session = Session::new(Config::default());
        session.store.dispatch(Action::DismissMoodBanner);
        assert!(!rendered(&session).contains("Enhanced Mood Integration"));
    }

    #[test]
    fn empty_today_message() {
        let mut session = Session::new(Config::default());
        session.store.dispatch(Action::CompleteTask("1".into()));
        session.store.dispatch(Action::CompleteTask("2".into()));
        let out = rendered(&session);
        assert!(out.contains("No tasks due today"));
        assert!(!out.contains("Next Task"));
    }
}
