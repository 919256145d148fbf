//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::domain::announcement::Announcement;
use crate::domain::character::Character;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Host bridge configuration
    pub bridge: BridgeConfig,
    /// Per-action permission thresholds
    pub permissions: Permissions,
}

/// Host bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Base URL of the game-client host endpoint
    pub base_url: String,
    /// Use the seeded mock bridge instead of HTTP (demo without a live host)
    pub mock: bool,
    /// Simulated latency of the mock bridge, in milliseconds
    pub mock_delay_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mdt".to_string(),
            mock: true,
            mock_delay_ms: 0,
        }
    }
}

/// Numeric grade thresholds per privileged action
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Permissions {
    pub announcements: AnnouncementPermissions,
}

/// Thresholds for announcement actions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementPermissions {
    /// Minimum grade to create announcements
    pub create: u32,
    /// Minimum grade to delete announcements authored by someone else
    pub delete: u32,
}

impl Default for AnnouncementPermissions {
    fn default() -> Self {
        Self { create: 2, delete: 3 }
    }
}

impl Permissions {
    /// Editing is reserved for the author.
    pub fn can_edit_announcement(&self, actor: &Character, announcement: &Announcement) -> bool {
        actor.state_id == announcement.state_id
    }

    /// Authors may always delete their own announcements, regardless of
    /// grade; anyone else needs the configured grade.
    pub fn can_delete_announcement(&self, actor: &Character, announcement: &Announcement) -> bool {
        actor.state_id == announcement.state_id || actor.grade >= self.announcements.delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use chrono::Utc;

    fn actor(state_id: &str, grade: u32) -> Character {
        Character {
            state_id: state_id.into(),
            first_name: "Alex".into(),
            last_name: "Hart".into(),
            grade,
        }
    }

    fn announcement_by(state_id: &str) -> Announcement {
        Announcement {
            id: 1,
            state_id: state_id.into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            call_sign: Some(132),
            created_at: Utc::now(),
            contents: Document::default(),
        }
    }

    #[test]
    fn test_edit_requires_ownership() {
        let perms = Permissions::default();
        let item = announcement_by("AF32142");

        assert!(perms.can_edit_announcement(&actor("AF32142", 0), &item));
        // High grade does not grant edit on someone else's announcement
        assert!(!perms.can_edit_announcement(&actor("XK10293", 10), &item));
    }

    #[test]
    fn test_delete_ownership_or_grade() {
        let perms = Permissions::default();
        let item = announcement_by("AF32142");

        // Author may delete regardless of grade
        assert!(perms.can_delete_announcement(&actor("AF32142", 0), &item));
        // Non-author below threshold may not
        assert!(!perms.can_delete_announcement(&actor("XK10293", 2), &item));
        // Non-author at threshold may
        assert!(perms.can_delete_announcement(&actor("XK10293", 3), &item));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).expect("Failed to serialize config");
        let parsed: AppConfig = toml::from_str(&text).expect("Failed to parse config");

        assert_eq!(parsed.bridge.base_url, "https://mdt");
        assert!(parsed.bridge.mock);
        assert_eq!(parsed.permissions.announcements.delete, 3);
    }

    #[test]
    fn test_config_accepts_partial_file() {
        let parsed: AppConfig =
            toml::from_str("[bridge]\nbase_url = \"https://mdt\"\nmock = false\nmock_delay_ms = 0\n")
                .expect("Failed to parse partial config");
        assert!(!parsed.bridge.mock);
        assert_eq!(parsed.permissions.announcements.create, 2);
    }
}
