//! User-facing preferences toggled from the profile screen.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub mood_tracking: bool,
    pub minimal_celebrations: bool,
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mood_tracking: true,
            minimal_celebrations: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Shallow merge: every field present in `patch` overwrites ours.
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(v) = patch.mood_tracking {
            self.mood_tracking = v;
        }
        if let Some(v) = patch.minimal_celebrations {
            self.minimal_celebrations = v;
        }
        if let Some(v) = patch.reduced_motion {
            self.reduced_motion = v;
        }
        self
    }
}

/// Partial settings carried by `UpdateSettings`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_tracking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal_celebrations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

/// Names accepted by [`SettingsPatch::single`].
pub const SETTING_KEYS: [&str; 3] = ["moodTracking", "minimalCelebrations", "reducedMotion"];

impl SettingsPatch {
    /// Patch touching one toggle, by its camelCase or snake_case name.
    pub fn single(key: &str, value: bool) -> Result<Self, ValidationError> {
        let mut patch = Self::default();
        match key {
            "moodTracking" | "mood_tracking" => patch.mood_tracking = Some(value),
            "minimalCelebrations" | "minimal_celebrations" => {
                patch.minimal_celebrations = Some(value)
            }
            "reducedMotion" | "reduced_motion" => patch.reduced_motion = Some(value),
            _ => {
                return Err(ValidationError::UnknownVariant {
                    kind: "setting",
                    value: key.to_string(),
                    expected: "moodTracking, minimalCelebrations, reducedMotion",
                })
            }
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_present_fields() {
        let patch = SettingsPatch {
            reduced_motion: Some(true),
            ..SettingsPatch::default()
        };
        let merged = Settings::default().merged(&patch);
        assert!(merged.mood_tracking);
        assert!(!merged.minimal_celebrations);
        assert!(merged.reduced_motion);
    }

    #[test]
    fn single_accepts_both_spellings() {
        assert_eq!(
            SettingsPatch::single("minimal_celebrations", true).unwrap().minimal_celebrations,
            Some(true)
        );
        assert_eq!(
            SettingsPatch::single("moodTracking", false).unwrap().mood_tracking,
            Some(false)
        );
        assert!(SettingsPatch::single("darkMode", true).is_err());
    }

    #[test]
    fn patch_deserializes_partial_json() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"reducedMotion":true}"#).unwrap();
        assert_eq!(patch.reduced_motion, Some(true));
        assert_eq!(patch.mood_tracking, None);
        assert!(!patch.is_empty());
        assert!(SettingsPatch::default().is_empty());
    }
}
