//! Announcement - Department Feed Entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::document::Document;

/// One announcement on the dashboard feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    /// State id of the authoring character
    pub state_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub call_sign: Option<u32>,
    pub created_at: DateTime<Utc>,
    /// Rich-text body, rendered read-only
    pub contents: Document,
}

impl Announcement {
    /// "First Last · 132" header line
    pub fn author_line(&self) -> String {
        match self.call_sign {
            Some(cs) => format!("{} {} · {}", self.first_name, self.last_name, cs),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Initials for the avatar fallback
    pub fn author_initials(&self) -> String {
        let mut s = String::new();
        s.extend(self.first_name.chars().next());
        s.extend(self.last_name.chars().next());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(call_sign: Option<u32>) -> Announcement {
        Announcement {
            id: 7,
            state_id: "AF32142".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            call_sign,
            created_at: Utc::now(),
            contents: Document::default(),
        }
    }

    #[test]
    fn test_author_line() {
        assert_eq!(announcement(Some(132)).author_line(), "John Doe · 132");
        assert_eq!(announcement(None).author_line(), "John Doe");
    }
}
