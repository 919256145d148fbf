//! RosterState - Paginated Remote List State
//!
//! Owns the roster view's fetch lifecycle: one fetch per page change, rows
//! replaced wholesale on resolution. Every fetch gets a generation number;
//! a resolution carrying an old generation is discarded, so out-of-order
//! replies can never overwrite a newer page.

use crate::constants::ROSTER_PAGE_SIZE;
use crate::domain::officer::{InitialRosterPage, RosterOfficer};

/// State for the roster table
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    /// 1-based page the user is on; updated optimistically at dispatch
    pub current_page: usize,
    /// Rows of the most recently resolved current fetch, never accumulated
    pub officers: Vec<RosterOfficer>,
    /// Authoritative total, set only by the initial load
    pub total_records: usize,
    /// True from fetch dispatch until its resolution is applied
    pub loading: bool,
    /// Transport failure message; cleared on the next dispatch
    pub error: Option<String>,
    /// State id of the row whose actions menu is showing
    pub open_menu: Option<String>,
    /// Officer shown in the details overlay
    pub details: Option<RosterOfficer>,
    /// Latest issued fetch generation
    generation: u64,
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    /// Dispatch the mount-time fetch; returns its generation
    pub fn begin_initial_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Dispatch a page fetch. The page indicator moves immediately; rows
    /// stay until the reply lands. Returns the fetch generation.
    pub fn begin_page_fetch(&mut self, page: usize) -> u64 {
        self.current_page = page.max(1);
        self.loading = true;
        self.error = None;
        // The rows under an open menu are about to be replaced
        self.open_menu = None;
        self.generation += 1;
        self.generation
    }

    /// Open or close one row's actions menu
    pub fn toggle_menu(&mut self, state_id: &str) {
        if self.open_menu.as_deref() == Some(state_id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(state_id.to_string());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    /// Show the details overlay for one officer, closing the menu
    pub fn open_details(&mut self, officer: RosterOfficer) {
        self.open_menu = None;
        self.details = Some(officer);
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    /// Apply the initial-load reply. Stale generations are discarded;
    /// returns whether anything changed.
    pub fn apply_initial(&mut self, generation: u64, page: InitialRosterPage) -> bool {
        if generation != self.generation {
            return false;
        }
        self.officers = page.officers;
        self.total_records = page.total_records;
        self.loading = false;
        true
    }

    /// Apply a page-fetch reply; the total count is deliberately untouched
    pub fn apply_page(&mut self, generation: u64, officers: Vec<RosterOfficer>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.officers = officers;
        self.loading = false;
        true
    }

    /// Apply a transport failure: clear the busy flag and surface the
    /// message so the page can offer a retry.
    pub fn apply_error(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    /// Number of pages the pagination bar offers, never zero
    pub fn page_count(&self) -> usize {
        self.total_records.div_ceil(ROSTER_PAGE_SIZE).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn officer(state_id: &str) -> RosterOfficer {
        RosterOfficer {
            state_id: state_id.into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            call_sign: Some(132),
            title: "LSPD Sergeant".into(),
            unit_id: Some(3),
            player_id: Some(1),
            position: None,
            image: None,
        }
    }

    fn officers(ids: &[&str]) -> Vec<RosterOfficer> {
        ids.iter().map(|id| officer(id)).collect()
    }

    #[test]
    fn test_mount_defaults() {
        let state = RosterState::new();
        assert_eq!(state.current_page, 1);
        assert!(state.officers.is_empty());
        assert_eq!(state.total_records, 0);
        assert!(!state.loading);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_initial_load_resolution() {
        // Initial reply: { totalRecords: 9, officers: [3 records] }
        let mut state = RosterState::new();
        let generation = state.begin_initial_fetch();
        assert!(state.loading);

        let applied = state.apply_initial(
            generation,
            InitialRosterPage {
                total_records: 9,
                officers: officers(&["AF32142", "QE32142", "CA92151"]),
            },
        );

        assert!(applied);
        assert_eq!(state.officers.len(), 3);
        assert_eq!(state.total_records, 9);
        assert!(!state.loading);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_page_change_is_optimistic() {
        // The page indicator moves at dispatch, rows only at resolution
        let mut state = RosterState::new();
        let generation = state.begin_initial_fetch();
        state.apply_initial(
            generation,
            InitialRosterPage {
                total_records: 18,
                officers: officers(&["AF32142"]),
            },
        );

        let generation = state.begin_page_fetch(2);
        assert_eq!(state.current_page, 2);
        assert!(state.loading);
        assert_eq!(state.officers[0].state_id, "AF32142");

        state.apply_page(generation, officers(&["QE32142"]));
        assert_eq!(state.officers[0].state_id, "QE32142");
        assert!(!state.loading);
    }

    #[test]
    fn test_busy_flag_brackets_every_fetch() {
        // false -> true at dispatch, true -> false exactly once at resolution
        let mut state = RosterState::new();
        assert!(!state.loading);

        let generation = state.begin_page_fetch(3);
        assert!(state.loading);
        assert!(state.apply_page(generation, officers(&["AF32142"])));
        assert!(!state.loading);

        // A second resolution of the same generation changes nothing
        assert!(state.apply_page(generation, Vec::new()));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state = RosterState::new();
        let first = state.begin_page_fetch(2);
        let second = state.begin_page_fetch(3);

        // The slower page-2 reply lands after page 3 was requested
        assert!(!state.apply_page(first, officers(&["AF32142"])));
        assert!(state.officers.is_empty());
        assert!(state.loading);

        assert!(state.apply_page(second, officers(&["QE32142"])));
        assert_eq!(state.officers[0].state_id, "QE32142");
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_page_fetch_never_touches_total() {
        let mut state = RosterState::new();
        let generation = state.begin_initial_fetch();
        state.apply_initial(
            generation,
            InitialRosterPage {
                total_records: 27,
                officers: Vec::new(),
            },
        );

        let generation = state.begin_page_fetch(2);
        state.apply_page(generation, officers(&["AF32142"]));
        assert_eq!(state.total_records, 27);
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn test_error_clears_busy_and_surfaces_message() {
        let mut state = RosterState::new();
        let generation = state.begin_initial_fetch();
        assert!(state.apply_error(generation, "host unreachable".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("host unreachable"));

        // Retry clears the message again
        state.begin_initial_fetch();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_page_count_ceiling() {
        let mut state = RosterState::new();
        for (total, pages) in [(0, 1), (1, 1), (9, 1), (10, 2), (18, 2), (19, 3)] {
            state.total_records = total;
            assert_eq!(state.page_count(), pages, "total_records = {total}");
        }
    }

    #[test]
    fn test_row_menu_toggles_and_is_exclusive() {
        let mut state = RosterState::new();
        state.toggle_menu("AF32142");
        assert_eq!(state.open_menu.as_deref(), Some("AF32142"));

        // Opening another row's menu replaces the first
        state.toggle_menu("QE32142");
        assert_eq!(state.open_menu.as_deref(), Some("QE32142"));

        // Toggling the open row closes it
        state.toggle_menu("QE32142");
        assert!(state.open_menu.is_none());
    }

    #[test]
    fn test_page_fetch_closes_row_menu() {
        let mut state = RosterState::new();
        state.toggle_menu("AF32142");
        state.begin_page_fetch(2);
        assert!(state.open_menu.is_none());
    }

    #[test]
    fn test_details_overlay_lifecycle() {
        let mut state = RosterState::new();
        state.toggle_menu("AF32142");

        state.open_details(officer("AF32142"));
        assert!(state.open_menu.is_none());
        assert_eq!(state.details.as_ref().map(|o| o.state_id.as_str()), Some("AF32142"));

        state.close_details();
        assert!(state.details.is_none());
    }

    #[test]
    fn test_page_floor_is_one() {
        let mut state = RosterState::new();
        state.begin_page_fetch(0);
        assert_eq!(state.current_page, 1);
    }
}
