//! Shared constants

/// Rows shown per roster page
pub const ROSTER_PAGE_SIZE: usize = 9;

/// Query cache key for the announcement feed
pub const QUERY_ANNOUNCEMENTS: &str = "announcements";

/// Bridge action names understood by the game-client host
pub mod actions {
    pub const GET_INITIAL_ROSTER_PAGE: &str = "getInitialRosterPage";
    pub const GET_ROSTER_PAGE: &str = "getRosterPage";
    pub const GET_ANNOUNCEMENTS: &str = "getAnnouncements";
    pub const DELETE_ANNOUNCEMENT: &str = "deleteAnnouncement";
    pub const SAVE_ANNOUNCEMENT: &str = "saveAnnouncement";
}
