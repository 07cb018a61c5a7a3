//! Id and time sources injected into the reducer.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::AppState;

/// Hands out unique record ids.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic decimal counter, shared by tasks and rewards.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Counter positioned after every numeric id already in `state`.
    pub fn after(state: &AppState) -> Self {
        let max = state
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .chain(state.rewards.iter().map(|r| r.id.as_str()))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max + 1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// Wall-clock source.
pub trait Clock: fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_skip_seed_ids() {
        let state = AppState::seed(Utc::now());
        let mut ids = SequentialIds::after(&state);
        assert_eq!(ids.next_id(), "4");
        assert_eq!(ids.next_id(), "5");
    }

    #[test]
    fn sequential_ids_ignore_non_numeric() {
        let mut state = AppState::seed(Utc::now());
        state.tasks[0].id = "abc".into();
        state.rewards[2].id = "99".into();
        assert_eq!(SequentialIds::after(&state).next_id(), "100");
    }

    #[test]
    fn uuid_ids_do_not_collide() {
        let mut ids = UuidIds;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }
}
