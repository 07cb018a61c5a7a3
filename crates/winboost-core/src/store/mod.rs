//! Application state store.
//!
//! One [`AppState`] tree, one [`Store`] that owns it, and the pure
//! [`reducer::apply`] function that maps `(state, action)` to the next state.
//! Nothing here persists: every process starts from [`AppState::seed`].

mod action;
mod container;
pub mod ids;
pub mod reducer;

pub use action::Action;
pub use container::{Store, SubscriptionId};
pub use ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds};
pub use reducer::{apply, CompletionPolicy, TransitionContext};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reward::{Reward, RewardType};
use crate::settings::Settings;
use crate::task::{BoostLevel, Task};
use crate::user::User;

/// Energy level a fresh session starts at.
pub const SEED_ENERGY_LEVEL: u8 = 6;

/// The whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: User,
    pub tasks: Vec<Task>,
    pub rewards: Vec<Reward>,
    pub current_energy_level: u8,
    pub settings: Settings,
}

impl AppState {
    /// The fixed snapshot every session starts from. Seed tasks are due `now`.
    pub fn seed(now: DateTime<Utc>) -> Self {
        let seed_task = |id: &str, name: &str, points, boost, minutes, energy, completed| Task {
            id: id.into(),
            name: String::from(name),
            description: None,
            boost_level: boost,
            point_value: points,
            time_estimate: minutes,
            energy_required: energy,
            completed,
            due_date: Some(now),
            completed_at: None,
            created_at: None,
        };
        let seed_reward = |id: &str, name: &str, cost, reward_type, icon: &str| Reward {
            id: id.into(),
            name: String::from(name),
            point_cost: cost,
            reward_type,
            icon: icon.into(),
        };

        Self {
            user: User {
                name: "Guest User".into(),
                points: 120,
                total_wins: 25,
                mood_integration_enabled: false,
            },
            tasks: vec![
                seed_task("1", "Review morning emails", 10, BoostLevel::Easy, 15, 3, false),
                seed_task("2", "Complete project proposal", 25, BoostLevel::Hard, 90, 8, false),
                seed_task("3", "Take a 10-minute walk", 5, BoostLevel::Easy, 10, 2, true),
            ],
            rewards: vec![
                seed_reward("1", "15-minute social media break", 15, RewardType::Timed, "📱"),
                seed_reward("2", "Favorite coffee treat", 30, RewardType::Experience, "☕"),
                seed_reward("3", "Watch one episode", 50, RewardType::Experience, "📺"),
            ],
            current_energy_level: SEED_ENERGY_LEVEL,
            settings: Settings::default(),
        }
    }

    /// Seed snapshot with the user renamed.
    pub fn seed_for(user_name: &str, now: DateTime<Utc>) -> Self {
        let mut state = Self::seed(now);
        state.user.name = user_name.to_string();
        state
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }
}
