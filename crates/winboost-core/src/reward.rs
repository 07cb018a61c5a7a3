//! Rewards that accumulated points can be spent on.
//!
//! Redemption never consumes a reward; the same reward can be redeemed again
//! as long as the balance covers it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Timed,
    Experience,
    Instant,
}

impl RewardType {
    pub fn label(self) -> &'static str {
        match self {
            RewardType::Timed => "15 minute break",
            RewardType::Experience => "Experience reward",
            RewardType::Instant => "Instant reward",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RewardType::Timed => "timed",
            RewardType::Experience => "experience",
            RewardType::Instant => "instant",
        }
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewardType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timed" => Ok(RewardType::Timed),
            "experience" => Ok(RewardType::Experience),
            "instant" => Ok(RewardType::Instant),
            _ => Err(ValidationError::UnknownVariant {
                kind: "reward type",
                value: s.to_string(),
                expected: "timed, experience, instant",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub point_cost: u32,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub icon: String,
}

impl Reward {
    pub fn from_new(id: String, new: NewReward) -> Self {
        Reward {
            id,
            name: new.name,
            point_cost: new.point_cost,
            reward_type: new.reward_type,
            icon: new.icon,
        }
    }

    pub fn can_afford(&self, points: u32) -> bool {
        points >= self.point_cost
    }

    /// Points still missing, or `None` when affordable.
    pub fn shortfall(&self, points: u32) -> Option<u32> {
        (!self.can_afford(points)).then(|| self.point_cost - points)
    }

    /// Message shown when the user taps redeem without enough points.
    pub fn shortfall_message(&self, points: u32) -> Option<String> {
        self.shortfall(points)
            .map(|missing| format!("You need {missing} more points to redeem this reward."))
    }
}

/// Payload of `AddReward`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReward {
    pub name: String,
    pub point_cost: u32,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Reward {
        Reward {
            id: "2".into(),
            name: "Favorite coffee treat".into(),
            point_cost: 30,
            reward_type: RewardType::Experience,
            icon: "☕".into(),
        }
    }

    #[test]
    fn affordability_is_inclusive() {
        let reward = coffee();
        assert!(reward.can_afford(30));
        assert!(!reward.can_afford(29));
        assert_eq!(reward.shortfall(30), None);
        assert_eq!(reward.shortfall(12), Some(18));
    }

    #[test]
    fn shortfall_message_names_missing_points() {
        assert_eq!(
            coffee().shortfall_message(20).as_deref(),
            Some("You need 10 more points to redeem this reward.")
        );
        assert_eq!(coffee().shortfall_message(100), None);
    }

    #[test]
    fn type_field_uses_wire_name() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(json["type"], "experience");
        assert_eq!(json["pointCost"], 30);
    }

    #[test]
    fn type_labels() {
        assert_eq!(RewardType::Timed.label(), "15 minute break");
        assert_eq!("INSTANT".parse::<RewardType>().unwrap(), RewardType::Instant);
        assert!("forever".parse::<RewardType>().is_err());
    }
}
