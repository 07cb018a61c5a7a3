//! The composition root: one store per process, plus per-screen UI state.

use chrono::{Datelike, NaiveDate};
use winboost_core::store::{SequentialIds, UuidIds};
use winboost_core::{AppState, BoostSampler, Config, IdStrategy, MonthCursor, Store, TaskFilter, ViewOptions};

use crate::screens::Tab;

/// Ephemeral state of the calendar screen.
#[derive(Debug, Clone, Copy)]
pub struct CalendarState {
    pub cursor: MonthCursor,
    pub selected_day: u32,
}

impl CalendarState {
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.cursor.date(self.selected_day)
    }
}

/// Everything a running app holds. Screens only read from it; commands
/// mutate domain data exclusively through `store.dispatch`.
#[derive(Debug)]
pub struct Session {
    pub store: Store,
    pub config: Config,
    pub sampler: BoostSampler,
    pub views: ViewOptions,
    pub tab: Tab,
    pub filter: TaskFilter,
    pub calendar: CalendarState,
    pub color: bool,
}

impl Session {
    /// Build the store from the seed snapshot and the configured policies.
    pub fn new(config: Config) -> Self {
        let state = AppState::seed_for(&config.user.name, chrono::Utc::now());
        let store = match config.store.id_strategy {
            IdStrategy::Uuid => Store::new(state).with_ids(UuidIds),
            IdStrategy::Sequential => {
                let ids = SequentialIds::after(&state);
                Store::new(state).with_ids(ids)
            }
        }
        .with_completion_policy(config.completion_policy());

        let today = store.now().date_naive();
        Self {
            sampler: BoostSampler::seeded(config.defaults.seed),
            views: config.view_options(),
            store,
            config,
            tab: Tab::Home,
            filter: TaskFilter::All,
            calendar: CalendarState {
                cursor: MonthCursor::containing(today),
                selected_day: today.day(),
            },
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.store.now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winboost_core::{Action, CompletionPolicy};

    #[test]
    fn sequential_session_numbers_after_seed() {
        let mut config = Config::default();
        config.set("store.id_strategy", "sequential").unwrap();
        config.set("user.name", "Kim").unwrap();
        let mut session = Session::new(config);

        assert_eq!(session.store.state().user.name, "Kim");
        session.store.dispatch(Action::AddTask(winboost_core::NewTask {
            name: "Stretch".into(),
            description: None,
            boost_level: winboost_core::BoostLevel::Easy,
            point_value: 5,
            time_estimate: 5,
            energy_required: 1,
            due_date: None,
        }));
        assert_eq!(session.store.state().tasks.last().unwrap().id, "4");
    }

    #[test]
    fn policy_comes_from_config() {
        let mut config = Config::default();
        config.store.reaward_completed = true;
        let session = Session::new(config);
        assert_eq!(session.store.completion_policy(), CompletionPolicy::Reaward);
    }

    #[test]
    fn calendar_starts_on_today() {
        let session = Session::new(Config::default());
        assert_eq!(session.calendar.selected_date(), Some(session.today()));
    }
}
