//! Character - The Acting Identity
//!
//! Whoever is signed into the MDT. Authorization for announcement actions is
//! decided from `state_id` (ownership) and `grade` (numeric rank).

use serde::{Deserialize, Serialize};

/// The signed-in character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Stable unique key, matched against item owner keys
    pub state_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Numeric authorization level, compared against per-action thresholds
    pub grade: u32,
}

impl Character {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self {
            state_id: "XK10293".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Hart".to_string(),
            grade: 1,
        }
    }
}
