//! Caller-boundary validation for domain records.
//!
//! The store trusts its payloads. Forms and the CLI run these checks before
//! dispatching so that an empty name or a zero cost never reaches state.

use crate::error::ValidationError;
use crate::reward::NewReward;
use crate::task::NewTask;

pub const MIN_ENERGY: u8 = 1;
pub const MAX_ENERGY: u8 = 10;

/// Trimmed task name, rejecting blanks.
pub fn task_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyTaskName);
    }
    Ok(name.to_string())
}

/// Trimmed optional text; blank becomes `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Leading decimal integer of `raw`, ignoring surrounding whitespace and any
/// trailing garbage (`"12 pts"` → 12). `None` if no digits lead.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Point value from form input; anything but a positive integer yields `default`.
pub fn point_value(raw: &str, default: u32) -> u32 {
    positive(raw).unwrap_or(default)
}

/// Time estimate from form input; `None` means "sample one from the boost level".
pub fn time_estimate(raw: &str) -> Option<u32> {
    positive(raw)
}

fn positive(raw: &str) -> Option<u32> {
    leading_int(raw)
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

/// Energy level in `1..=10`.
pub fn energy_level(level: i64) -> Result<u8, ValidationError> {
    if (MIN_ENERGY as i64..=MAX_ENERGY as i64).contains(&level) {
        Ok(level as u8)
    } else {
        Err(ValidationError::EnergyOutOfRange(level))
    }
}

/// Check every field invariant of an `AddTask` payload.
pub fn new_task(task: &NewTask) -> Result<(), ValidationError> {
    if task.name.trim().is_empty() {
        return Err(ValidationError::EmptyTaskName);
    }
    if task.point_value == 0 {
        return Err(ValidationError::NotPositive { field: "pointValue" });
    }
    if task.time_estimate == 0 {
        return Err(ValidationError::NotPositive { field: "timeEstimate" });
    }
    energy_level(task.energy_required as i64)?;
    Ok(())
}

/// Check every field invariant of an `AddReward` payload.
pub fn new_reward(reward: &NewReward) -> Result<(), ValidationError> {
    if reward.name.trim().is_empty() {
        return Err(ValidationError::EmptyRewardName);
    }
    if reward.point_cost == 0 {
        return Err(ValidationError::NotPositive { field: "pointCost" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardType;
    use crate::task::BoostLevel;

    #[test]
    fn blank_task_name_is_rejected() {
        assert_eq!(task_name("   "), Err(ValidationError::EmptyTaskName));
        assert_eq!(task_name("  Walk  ").unwrap(), "Walk");
    }

    #[test]
    fn leading_int_reads_prefix() {
        assert_eq!(leading_int("12"), Some(12));
        assert_eq!(leading_int(" 12 pts"), Some(12));
        assert_eq!(leading_int("-4"), Some(-4));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
    }

    #[test]
    fn point_value_falls_back_to_default() {
        assert_eq!(point_value("25", 10), 25);
        assert_eq!(point_value("", 10), 10);
        assert_eq!(point_value("lots", 10), 10);
        assert_eq!(point_value("0", 10), 10);
        assert_eq!(point_value("-5", 10), 10);
    }

    #[test]
    fn time_estimate_blank_means_sample() {
        assert_eq!(time_estimate(""), None);
        assert_eq!(time_estimate("45"), Some(45));
        assert_eq!(time_estimate("0"), None);
    }

    #[test]
    fn energy_level_bounds() {
        assert_eq!(energy_level(1), Ok(1));
        assert_eq!(energy_level(10), Ok(10));
        assert_eq!(energy_level(0), Err(ValidationError::EnergyOutOfRange(0)));
        assert_eq!(energy_level(11), Err(ValidationError::EnergyOutOfRange(11)));
    }

    #[test]
    fn new_task_checks_each_field() {
        let ok = NewTask {
            name: "Call mom".into(),
            description: None,
            boost_level: BoostLevel::Easy,
            point_value: 5,
            time_estimate: 10,
            energy_required: 2,
            due_date: None,
        };
        assert!(new_task(&ok).is_ok());
        assert!(new_task(&NewTask { point_value: 0, ..ok.clone() }).is_err());
        assert!(new_task(&NewTask { time_estimate: 0, ..ok.clone() }).is_err());
        assert!(new_task(&NewTask { energy_required: 11, ..ok.clone() }).is_err());
        assert!(new_task(&NewTask { name: " ".into(), ..ok }).is_err());
    }

    #[test]
    fn new_reward_requires_name_and_cost() {
        let ok = NewReward {
            name: "Nap".into(),
            point_cost: 20,
            reward_type: RewardType::Instant,
            icon: "😴".into(),
        };
        assert!(new_reward(&ok).is_ok());
        assert_eq!(
            new_reward(&NewReward { point_cost: 0, ..ok.clone() }),
            Err(ValidationError::NotPositive { field: "pointCost" })
        );
        assert_eq!(
            new_reward(&NewReward { name: "".into(), ..ok }),
            Err(ValidationError::EmptyRewardName)
        );
    }
}
