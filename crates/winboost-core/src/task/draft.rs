//! Add-task form state and its conversion into an `AddTask` payload.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::boost::BoostSampler;
use super::{BoostLevel, NewTask};
use crate::error::ValidationError;
use crate::validation;

/// Point value used when the form's point field is blank or not a number.
pub const DEFAULT_POINT_VALUE: u32 = 10;

/// One-tap task name suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickTemplate {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const QUICK_TEMPLATES: [QuickTemplate; 6] = [
    QuickTemplate { name: "Check email", icon: "mail" },
    QuickTemplate { name: "Make important phone call", icon: "call" },
    QuickTemplate { name: "Tidy workspace", icon: "home" },
    QuickTemplate { name: "Take medication", icon: "medical" },
    QuickTemplate { name: "Exercise/walk", icon: "walk" },
    QuickTemplate { name: "Read for 20 minutes", icon: "book" },
];

/// Raw, unvalidated form input. Numeric fields stay strings until `build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub boost_level: BoostLevel,
    pub point_value: String,
    pub time_estimate: String,
    pub target_day: Option<NaiveDate>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            boost_level: BoostLevel::Medium,
            point_value: DEFAULT_POINT_VALUE.to_string(),
            time_estimate: String::new(),
            target_day: None,
        }
    }
}

impl TaskDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn from_template(template: &QuickTemplate) -> Self {
        Self::named(template.name)
    }

    /// Validate the form and fill in boost-level defaults.
    ///
    /// Energy is always sampled; the time estimate only when the field does
    /// not hold a positive number. The due date is `now`, moved onto
    /// `target_day` when one was picked.
    pub fn build<R: Rng>(
        &self,
        sampler: &mut BoostSampler<R>,
        default_points: u32,
        now: DateTime<Utc>,
    ) -> Result<NewTask, ValidationError> {
        let name = validation::task_name(&self.name)?;
        let level = self.boost_level;

        let point_value = validation::point_value(&self.point_value, default_points);
        let time_estimate = match validation::time_estimate(&self.time_estimate) {
            Some(minutes) => minutes,
            None => sampler.time_estimate(level),
        };
        let energy_required = sampler.energy(level);

        let due_date = match self.target_day {
            Some(day) => day.and_time(now.time()).and_utc(),
            None => now,
        };

        let task = NewTask {
            name,
            description: validation::optional_text(&self.description),
            boost_level: level,
            point_value,
            time_estimate,
            energy_required,
            due_date: Some(due_date),
        };
        validation::new_task(&task)?;
        Ok(task)
    }
}
