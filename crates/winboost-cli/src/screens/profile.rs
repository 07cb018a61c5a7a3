use std::fmt::{self, Write};

use winboost_core::settings::SETTING_KEYS;

use crate::components::{energy_bar, heading};
use crate::session::Session;

fn toggle(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

pub fn render(out: &mut impl Write, session: &Session) -> fmt::Result {
    let state = session.store.state();
    let user = &state.user;
    let done = state.tasks.iter().filter(|t| t.completed).count();

    writeln!(out, "👤 {}\n", user.name)?;
    writeln!(out, "{}", heading("Your Progress"))?;
    writeln!(out, "Total Points:    {}", user.points)?;
    writeln!(out, "Wins Achieved:   {}", user.total_wins)?;
    writeln!(out, "Tasks Completed: {done}/{}", state.tasks.len())?;

    writeln!(out, "\n{}", heading("Current Energy Level"))?;
    writeln!(out, "{}", energy_bar(state.current_energy_level, session.color))?;
    writeln!(out, "`energy <1-10>` to update")?;

    let settings = &state.settings;
    writeln!(out, "\n{}", heading("Settings"))?;
    let values = [settings.mood_tracking, settings.minimal_celebrations, settings.reduced_motion];
    for (key, on) in SETTING_KEYS.iter().zip(values) {
        writeln!(out, "{key:<20} {}", toggle(on))?;
    }
    writeln!(out, "Mood integration     {}", toggle(user.mood_integration_enabled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use winboost_core::{Action, Config, SettingsPatch};

    #[test]
    fn shows_stats_and_settings() {
        let mut session = Session::new(Config::default());
        session.store.dispatch(Action::UpdateSettings(SettingsPatch {
            reduced_motion: Some(true),
            ..SettingsPatch::default()
        }));
        let mut out = String::new();
        render(&mut out, &session).unwrap();
        assert!(out.contains("Total Points:    120"));
        assert!(out.contains("Tasks Completed: 1/3"));
        assert!(out.contains("moodTracking         on"));
        assert!(out.contains("minimalCelebrations  off"));
        assert!(out.contains("reducedMotion        on"));
    }
}
