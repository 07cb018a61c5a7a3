//! The five tabs. Each screen renders a read-only view of the session.

mod calendar;
mod home;
mod profile;
mod rewards;
mod wins;

use std::fmt;

use clap::ValueEnum;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    Home,
    Wins,
    Calendar,
    Rewards,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Wins, Tab::Calendar, Tab::Rewards, Tab::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Wins => "Wins",
            Tab::Calendar => "Calendar",
            Tab::Rewards => "Rewards",
            Tab::Profile => "Profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Tab bar with the active tab bracketed.
pub fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{tab}]")
            } else {
                format!(" {tab} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the session's active tab under the tab bar.
pub fn render(session: &Session) -> Result<String, fmt::Error> {
    let mut out = tab_bar(session.tab);
    out.push_str("\n\n");
    match session.tab {
        Tab::Home => home::render(&mut out, session)?,
        Tab::Wins => wins::render(&mut out, session)?,
        Tab::Calendar => calendar::render(&mut out, session)?,
        Tab::Rewards => rewards::render(&mut out, session)?,
        Tab::Profile => profile::render(&mut out, session)?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winboost_core::Config;

    #[test]
    fn tab_bar_brackets_active() {
        assert_eq!(
            tab_bar(Tab::Wins),
            " Home  [Wins]  Calendar   Rewards   Profile "
        );
    }

    #[test]
    fn every_tab_renders() {
        let mut session = Session::new(Config::default());
        for tab in Tab::ALL {
            session.tab = tab;
            let out = render(&session).unwrap();
            assert!(out.contains(&format!("[{tab}]")), "{tab} missing from tab bar");
        }
    }
}
