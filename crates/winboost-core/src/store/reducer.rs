//! The transition function.
//!
//! `apply` is pure given its context: the only inputs besides the state and
//! the action are the id source and the instant used for timestamps, both
//! carried by [`TransitionContext`]. It never fails. Actions that do not
//! apply (unknown id, insufficient points, unknown kind) return the input
//! state untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ids::IdGenerator;
use super::{Action, AppState};
use crate::reward::Reward;
use crate::task::Task;

/// What `CompleteTask` does with a task that is already completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Already-completed tasks are left alone and award nothing.
    #[default]
    Guarded,
    /// Every completion awards points and a win, even a repeated one.
    Reaward,
}

/// Everything `apply` needs beyond state and action.
#[derive(Debug)]
pub struct TransitionContext<'a> {
    pub now: DateTime<Utc>,
    pub ids: &'a mut dyn IdGenerator,
    pub completion: CompletionPolicy,
}

/// Apply one action and return the next state.
pub fn apply(mut state: AppState, action: Action, ctx: &mut TransitionContext<'_>) -> AppState {
    match action {
        Action::AddTask(new) => {
            let id = ctx.ids.next_id();
            debug!(task_id = %id, name = %new.name, "adding task");
            state.tasks.push(Task::from_new(id, new, ctx.now));
            state
        }

        Action::CompleteTask(id) => complete_task(state, &id, ctx),

        Action::DeleteTask(id) => {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            if state.tasks.len() == before {
                debug!(task_id = %id, "delete ignored: no such task");
            }
            state
        }

        Action::AddReward(new) => {
            let id = ctx.ids.next_id();
            debug!(reward_id = %id, name = %new.name, "adding reward");
            state.rewards.push(Reward::from_new(id, new));
            state
        }

        Action::RedeemReward(id) => redeem_reward(state, &id),

        Action::UpdateEnergy(level) => {
            state.current_energy_level = level;
            state
        }

        Action::UpdateSettings(patch) => {
            state.settings = state.settings.merged(&patch);
            state
        }

        Action::DismissMoodBanner => {
            state.user.mood_integration_enabled = true;
            state
        }

        Action::Unknown => {
            debug!("ignoring unrecognized action");
            state
        }
    }
}

fn complete_task(mut state: AppState, id: &str, ctx: &TransitionContext<'_>) -> AppState {
    let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
        debug!(task_id = %id, "complete ignored: no such task");
        return state;
    };

    if task.completed {
        match ctx.completion {
            CompletionPolicy::Guarded => {
                debug!(task_id = %id, "complete ignored: already completed");
                return state;
            }
            CompletionPolicy::Reaward => {
                debug!(task_id = %id, "re-completing an already completed task");
            }
        }
    }

    task.completed = true;
    task.completed_at = Some(ctx.now);
    let award = task.point_value;

    state.user.points = state.user.points.saturating_add(award);
    state.user.total_wins = state.user.total_wins.saturating_add(1);
    info!(task_id = %id, award, points = state.user.points, "task completed");
    state
}

fn redeem_reward(mut state: AppState, id: &str) -> AppState {
    let Some(cost) = state
        .rewards
        .iter()
        .find(|reward| reward.id == id)
        .map(|reward| reward.point_cost)
    else {
        debug!(reward_id = %id, "redeem ignored: no such reward");
        return state;
    };

    if state.user.points < cost {
        debug!(reward_id = %id, cost, points = state.user.points, "redeem ignored: insufficient points");
        return state;
    }

    state.user.points -= cost;
    info!(reward_id = %id, cost, points = state.user.points, "reward redeemed");
    state
}
