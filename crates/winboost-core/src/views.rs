//! Read-only projections screens derive from state.
//!
//! All functions borrow from the input collections and keep collection
//! (insertion) order. Nothing is cached; collections are small.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::reward::Reward;
use crate::task::{Task, QUICK_WIN_MAX_MINUTES};
use crate::theme::colors;

/// Tunables for the projections. Defaults match the shipped screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub today_limit: usize,
    pub rewards_preview: usize,
    pub quick_win_max_minutes: u32,
    pub energy_match_radius: u8,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            today_limit: 3,
            rewards_preview: 3,
            quick_win_max_minutes: QUICK_WIN_MAX_MINUTES,
            energy_match_radius: 2,
        }
    }
}

/// Open tasks that have a due date, first `limit` in collection order.
pub fn todays_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some())
        .take(limit)
        .collect()
}

/// First open task the user has the energy for; otherwise the first open task.
pub fn energy_appropriate_task(tasks: &[Task], energy: u8) -> Option<&Task> {
    let open = || tasks.iter().filter(|t| !t.completed);
    open()
        .find(|t| t.energy_required <= energy)
        .or_else(|| open().next())
}

/// Open, easy, and short enough.
pub fn quick_wins<'a>(tasks: impl IntoIterator<Item = &'a Task>, max_minutes: u32) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|t| !t.completed && t.is_quick_win_within(max_minutes))
        .collect()
}

/// Open tasks whose energy cost is within `radius` of the current level.
pub fn energy_matches<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    energy: u8,
    radius: u8,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|t| !t.completed && t.energy_required.abs_diff(energy) <= radius)
        .collect()
}

/// Tasks due on `day` (UTC calendar day), any time of day.
pub fn tasks_on_day(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.due_date.is_some_and(|due| due.date_naive() == day))
        .collect()
}

/// First `limit` rewards, shown on the home screen.
pub fn available_rewards(rewards: &[Reward], limit: usize) -> Vec<&Reward> {
    rewards.iter().take(limit).collect()
}

/// Task list filter on the wins screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    /// Section heading for the filtered list.
    pub fn title(self) -> &'static str {
        match self {
            TaskFilter::All => "All Wins",
            TaskFilter::Pending => "Pending Wins",
            TaskFilter::Completed => "Completed Wins",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            TaskFilter::Completed => "No completed tasks yet",
            _ => "No tasks found",
        }
    }

    /// Quick-win and energy-match sections are hidden when browsing completed tasks.
    pub fn shows_suggestions(self) -> bool {
        self != TaskFilter::Completed
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
        })
    }
}

impl FromStr for TaskFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(ValidationError::UnknownVariant {
                kind: "filter",
                value: s.to_string(),
                expected: "all, pending, completed",
            }),
        }
    }
}

/// The wins screen's three lists, computed together.
#[derive(Debug)]
pub struct WinsView<'a> {
    pub filter: TaskFilter,
    pub quick_wins: Vec<&'a Task>,
    pub energy_matches: Vec<&'a Task>,
    pub tasks: Vec<&'a Task>,
}

impl<'a> WinsView<'a> {
    /// Suggestions are drawn from the filtered list and emptied under
    /// [`TaskFilter::Completed`].
    pub fn build(tasks: &'a [Task], energy: u8, filter: TaskFilter, opts: &ViewOptions) -> Self {
        let filtered = filter.apply(tasks);
        let (quick, matched) = if filter.shows_suggestions() {
            (
                quick_wins(filtered.iter().copied(), opts.quick_win_max_minutes),
                energy_matches(filtered.iter().copied(), energy, opts.energy_match_radius),
            )
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            filter,
            quick_wins: quick,
            energy_matches: matched,
            tasks: filtered,
        }
    }
}

/// Coloured band of the energy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyBand {
    Low,
    Medium,
    High,
}

impl EnergyBand {
    pub fn of(level: u8) -> Self {
        match level {
            0..=3 => EnergyBand::Low,
            4..=6 => EnergyBand::Medium,
            _ => EnergyBand::High,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EnergyBand::Low => colors::ENERGY_LOW,
            EnergyBand::Medium => colors::ENERGY_MEDIUM,
            EnergyBand::High => colors::ENERGY_HIGH,
        }
    }
}

/// Energy bar fill, 0..=100 percent.
pub fn energy_fill_percent(level: u8) -> u8 {
    level.min(10) * 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;
    use crate::task::BoostLevel;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, energy: u8, completed: bool) -> Task {
        Task {
            id: id.into(),
            name: format!("task {id}"),
            description: None,
            boost_level: BoostLevel::Medium,
            point_value: 10,
            time_estimate: 30,
            energy_required: energy,
            completed,
            due_date: Some(Utc.with_ymd_and_hms(2026, 2, 10, 23, 30, 0).unwrap()),
            completed_at: None,
            created_at: None,
        }
    }

    fn ids<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn energy_pick_is_first_fit_not_minimum() {
        let tasks = vec![task("0", 8, false), task("1", 2, false), task("2", 5, false)];
        let picked = energy_appropriate_task(&tasks, 5).unwrap();
        assert_eq!(picked.id, "1");

        let tasks = vec![task("0", 8, false), task("1", 4, false), task("2", 2, false)];
        assert_eq!(energy_appropriate_task(&tasks, 5).unwrap().id, "1");
    }

    #[test]
    fn energy_pick_falls_back_to_first_open() {
        let tasks = vec![task("0", 9, true), task("1", 8, false), task("2", 7, false)];
        assert_eq!(energy_appropriate_task(&tasks, 3).unwrap().id, "1");
        assert!(energy_appropriate_task(&[task("0", 1, true)], 5).is_none());
    }

    #[test]
    fn todays_tasks_caps_and_skips() {
        let mut tasks: Vec<Task> = (0..6).map(|i| task(&i.to_string(), 5, i == 1)).collect();
        tasks[2].due_date = None;
        assert_eq!(ids(&todays_tasks(&tasks, 3)), ["0", "3", "4"]);
    }

    #[test]
    fn quick_wins_need_easy_and_short() {
        let mut tasks = vec![task("0", 2, false), task("1", 2, false), task("2", 2, true)];
        tasks[0].boost_level = BoostLevel::Easy;
        tasks[0].time_estimate = 15;
        tasks[1].boost_level = BoostLevel::Easy;
        tasks[1].time_estimate = 16;
        tasks[2].boost_level = BoostLevel::Easy;
        tasks[2].time_estimate = 5;
        assert_eq!(ids(&quick_wins(&tasks, 15)), ["0"]);
    }

    #[test]
    fn energy_matches_use_radius() {
        let tasks = vec![task("0", 3, false), task("1", 4, false), task("2", 8, false), task("3", 6, true)];
        assert_eq!(ids(&energy_matches(&tasks, 6, 2)), ["1", "2"]);
    }

    #[test]
    fn day_match_ignores_time_of_day() {
        let tasks = vec![task("0", 1, false), task("1", 1, true)];
        let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(tasks_on_day(&tasks, day).len(), 2);
        assert!(tasks_on_day(&tasks, day.succ_opt().unwrap()).is_empty());
    }

    #[test]
    fn seed_projections() {
        let state = AppState::seed(Utc::now());
        assert_eq!(ids(&todays_tasks(&state.tasks, 3)), ["1", "2"]);
        assert_eq!(energy_appropriate_task(&state.tasks, 6).unwrap().id, "1");
        assert_eq!(ids(&quick_wins(&state.tasks, 15)), ["1"]);
        assert_eq!(ids(&energy_matches(&state.tasks, 6, 2)), ["2"]);
        assert_eq!(available_rewards(&state.rewards, 2).len(), 2);
    }

    #[test]
    fn wins_view_hides_suggestions_for_completed_filter() {
        let state = AppState::seed(Utc::now());
        let opts = ViewOptions::default();
        let view = WinsView::build(&state.tasks, 6, TaskFilter::Completed, &opts);
        assert!(view.quick_wins.is_empty());
        assert!(view.energy_matches.is_empty());
        assert_eq!(ids(&view.tasks), ["3"]);

        let view = WinsView::build(&state.tasks, 6, TaskFilter::Pending, &opts);
        assert_eq!(ids(&view.quick_wins), ["1"]);
        assert_eq!(ids(&view.tasks), ["1", "2"]);
    }

    #[test]
    fn wins_view_suggestions_match_standalone_projections() {
        let mut state = AppState::seed(Utc::now());
        state.tasks.push(task("4", 5, false));
        let opts = ViewOptions {
            quick_win_max_minutes: 10,
            energy_match_radius: 1,
            ..ViewOptions::default()
        };
        for energy in 1..=10 {
            let view = WinsView::build(&state.tasks, energy, TaskFilter::All, &opts);
            assert_eq!(view.quick_wins, quick_wins(&state.tasks, 10));
            assert_eq!(view.energy_matches, energy_matches(&state.tasks, energy, 1));
        }
    }

    #[test]
    fn filter_parsing_and_labels() {
        assert_eq!("Pending".parse::<TaskFilter>().unwrap(), TaskFilter::Pending);
        assert!("done".parse::<TaskFilter>().is_err());
        assert_eq!(TaskFilter::Completed.empty_message(), "No completed tasks yet");
        assert_eq!(TaskFilter::All.title(), "All Wins");
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }

    #[test]
    fn energy_band_thresholds() {
        assert_eq!(EnergyBand::of(3), EnergyBand::Low);
        assert_eq!(EnergyBand::of(4), EnergyBand::Medium);
        assert_eq!(EnergyBand::of(6), EnergyBand::Medium);
        assert_eq!(EnergyBand::of(7), EnergyBand::High);
        assert_eq!(EnergyBand::Low.color(), "#FF6B6B");
        assert_eq!(energy_fill_percent(6), 60);
        assert_eq!(energy_fill_percent(42), 100);
    }
}
