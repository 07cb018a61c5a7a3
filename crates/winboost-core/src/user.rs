use serde::{Deserialize, Serialize};

/// The single user aggregate. `points` and `total_wins` only change through
/// task completion and reward redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub points: u32,
    pub total_wins: u32,
    pub mood_integration_enabled: bool,
}

impl User {
    /// The home screen invites the user to enable mood tracking until they
    /// act on the banner.
    pub fn shows_mood_banner(&self) -> bool {
        !self.mood_integration_enabled
    }
}
