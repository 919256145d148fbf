//! RosterOfficer - One Roster Row

use serde::{Deserialize, Serialize};

/// A single officer on the department roster.
///
/// `state_id` is the stable unique key; the roster table keys its rows by it.
/// Every other field is display data the pagination logic never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterOfficer {
    /// Stable unique key within a page
    pub state_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unassigned officers have no call sign
    #[serde(default)]
    pub call_sign: Option<u32>,
    /// Rank title, e.g. "LSPD Sergeant"
    pub title: String,
    #[serde(default)]
    pub unit_id: Option<u32>,
    #[serde(default)]
    pub player_id: Option<u32>,
    /// World position as reported by the host
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    /// Avatar image reference
    #[serde(default)]
    pub image: Option<String>,
}

impl RosterOfficer {
    /// "First Last" display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Call sign for display, "-" when unassigned
    pub fn call_sign_label(&self) -> String {
        self.call_sign
            .map_or_else(|| "-".to_string(), |c| c.to_string())
    }

    /// Initials for the avatar fallback
    pub fn initials(&self) -> String {
        let mut s = String::new();
        s.extend(self.first_name.chars().next());
        s.extend(self.last_name.chars().next());
        s
    }
}

/// Reply shape of the `getInitialRosterPage` action.
///
/// `total_records` is authoritative for the pagination UI and is only ever
/// reported here; page fetches return bare row lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialRosterPage {
    pub total_records: usize,
    pub officers: Vec<RosterOfficer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_wire_shape() {
        let json = serde_json::json!({
            "totalRecords": 9,
            "officers": [{
                "stateId": "AF32142",
                "lastName": "Doe",
                "firstName": "John",
                "callSign": 132,
                "position": [0.0, 0.0, 0.0],
                "playerId": 1,
                "title": "LSPD Sergeant",
                "unitId": 3
            }]
        });

        let page: InitialRosterPage =
            serde_json::from_value(json).expect("Failed to parse initial page");
        assert_eq!(page.total_records, 9);
        assert_eq!(page.officers.len(), 1);
        assert_eq!(page.officers[0].state_id, "AF32142");
        assert_eq!(page.officers[0].call_sign, Some(132));
        assert!(page.officers[0].image.is_none());
    }

    #[test]
    fn test_display_helpers() {
        let officer = RosterOfficer {
            state_id: "QE32142".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            call_sign: None,
            title: "BCSO Deputy".into(),
            unit_id: None,
            player_id: None,
            position: None,
            image: None,
        };

        assert_eq!(officer.full_name(), "Jane Doe");
        assert_eq!(officer.call_sign_label(), "-");
        assert_eq!(officer.initials(), "JD");
    }
}
