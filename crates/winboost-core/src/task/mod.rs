//! Tasks ("wins") and their boost levels.
//!
//! A task is created once through [`crate::Action::AddTask`], may be
//! completed exactly once, and may be deleted. Energy cost and time estimate
//! defaults are derived from the boost level by the caller (see [`boost`] and
//! [`draft`]) before dispatch, never by the store.

pub mod boost;
pub mod draft;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Difficulty tier of a task.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BoostLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl BoostLevel {
    pub const ALL: [BoostLevel; 3] = [BoostLevel::Easy, BoostLevel::Medium, BoostLevel::Hard];

    /// Energy cost range a new task of this tier is sampled from.
    pub fn energy_range(self) -> RangeInclusive<u8> {
        match self {
            BoostLevel::Easy => 1..=3,
            BoostLevel::Medium => 4..=6,
            BoostLevel::Hard => 7..=10,
        }
    }

    /// Time estimate range (minutes) used when the user leaves it blank.
    pub fn time_range(self) -> RangeInclusive<u32> {
        match self {
            BoostLevel::Easy => 5..=19,
            BoostLevel::Medium => 15..=44,
            BoostLevel::Hard => 30..=89,
        }
    }

    /// Points shown next to the tier in the add-task form.
    pub fn suggested_points(self) -> u32 {
        match self {
            BoostLevel::Easy => 5,
            BoostLevel::Medium => 10,
            BoostLevel::Hard => 20,
        }
    }

    /// Human label with the rough duration band.
    pub fn label(self) -> &'static str {
        match self {
            BoostLevel::Easy => "Easy (~5-20 min)",
            BoostLevel::Medium => "Medium (~15-45 min)",
            BoostLevel::Hard => "Hard (~30-90 min)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoostLevel::Easy => "easy",
            BoostLevel::Medium => "medium",
            BoostLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for BoostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoostLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(BoostLevel::Easy),
            "medium" => Ok(BoostLevel::Medium),
            "hard" => Ok(BoostLevel::Hard),
            _ => Err(ValidationError::UnknownVariant {
                kind: "boost level",
                value: s.to_string(),
                expected: "easy, medium, hard",
            }),
        }
    }
}

/// A logged win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub boost_level: BoostLevel,
    pub point_value: u32,
    /// Minutes
    pub time_estimate: u32,
    /// 1..=10
    pub energy_required: u8,
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Materialize an `AddTask` payload into a stored task.
    pub fn from_new(id: String, new: NewTask, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            name: new.name,
            description: new.description,
            boost_level: new.boost_level,
            point_value: new.point_value,
            time_estimate: new.time_estimate,
            energy_required: new.energy_required,
            completed: false,
            due_date: new.due_date,
            completed_at: None,
            created_at: Some(created_at),
        }
    }

    /// Low-effort task: easy tier and at most `max_minutes` long.
    pub fn is_quick_win_within(&self, max_minutes: u32) -> bool {
        self.boost_level == BoostLevel::Easy && self.time_estimate <= max_minutes
    }

    pub fn is_quick_win(&self) -> bool {
        self.is_quick_win_within(QUICK_WIN_MAX_MINUTES)
    }

    /// Compact duration such as `~15min`, `~2h` or `~1h 30m`.
    pub fn time_display(&self) -> String {
        format_minutes(self.time_estimate)
    }
}

/// Longest time estimate (minutes) that still counts as a quick win.
pub const QUICK_WIN_MAX_MINUTES: u32 = 15;

pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("~{minutes}min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("~{hours}h")
    } else {
        format!("~{hours}h {rest}m")
    }
}

/// Payload of `AddTask`: everything except the fields the store stamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub boost_level: BoostLevel,
    pub point_value: u32,
    pub time_estimate: u32,
    pub energy_required: u8,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}
