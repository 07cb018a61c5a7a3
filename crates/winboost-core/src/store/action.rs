use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reward::NewReward;
use crate::settings::SettingsPatch;
use crate::task::NewTask;

/// Every transition the store understands.
///
/// Serialized as `{"type": "COMPLETE_TASK", "payload": "3"}`. A `type` this
/// enum does not know deserializes to [`Action::Unknown`] whatever its
/// payload, and the reducer treats it as a no-op. A known `type` with a
/// malformed payload is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddTask(NewTask),
    /// Task id
    CompleteTask(String),
    /// Task id
    DeleteTask(String),
    AddReward(NewReward),
    /// Reward id
    RedeemReward(String),
    /// New energy level; the store does not range-check it. On the wire any
    /// integer is accepted and saturated into `0..=255`.
    UpdateEnergy(u8),
    UpdateSettings(SettingsPatch),
    DismissMoodBanner,
    Unknown,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

fn payload<T: DeserializeOwned>(kind: &str, value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("invalid {kind} payload: {e}"))
}

impl RawAction {
    fn into_action(self) -> Result<Action, String> {
        let RawAction { kind, payload: value } = self;
        Ok(match kind.as_str() {
            "ADD_TASK" => Action::AddTask(payload(&kind, value)?),
            "COMPLETE_TASK" => Action::CompleteTask(payload(&kind, value)?),
            "DELETE_TASK" => Action::DeleteTask(payload(&kind, value)?),
            "ADD_REWARD" => Action::AddReward(payload(&kind, value)?),
            "REDEEM_REWARD" => Action::RedeemReward(payload(&kind, value)?),
            "UPDATE_ENERGY" => {
                let level: i64 = payload(&kind, value)?;
                Action::UpdateEnergy(level.clamp(0, i64::from(u8::MAX)) as u8)
            }
            "UPDATE_SETTINGS" => Action::UpdateSettings(payload(&kind, value)?),
            "DISMISS_MOOD_BANNER" => Action::DismissMoodBanner,
            _ => Action::Unknown,
        })
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawAction::deserialize(deserializer)?
            .into_action()
            .map_err(de::Error::custom)
    }
}

impl Action {
    /// Wire name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddTask(_) => "ADD_TASK",
            Action::CompleteTask(_) => "COMPLETE_TASK",
            Action::DeleteTask(_) => "DELETE_TASK",
            Action::AddReward(_) => "ADD_REWARD",
            Action::RedeemReward(_) => "REDEEM_REWARD",
            Action::UpdateEnergy(_) => "UPDATE_ENERGY",
            Action::UpdateSettings(_) => "UPDATE_SETTINGS",
            Action::DismissMoodBanner => "DISMISS_MOOD_BANNER",
            Action::Unknown => "UNKNOWN",
        }
    }
}
