//! DashboardState - Announcement Feed State
//!
//! Feed rows plus the per-card interaction state: which card's menu is open,
//! the delete confirmation flow, and the edit modal target. None of it
//! survives a remount.

use crate::domain::announcement::Announcement;

/// Lifecycle of the destructive delete action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    /// Nothing pending
    #[default]
    Idle,
    /// Confirmation dialog shown, nothing sent yet
    ConfirmPending { id: u64 },
    /// Remote call issued, awaiting the host's verdict
    InFlight { id: u64 },
}

/// State for the dashboard announcement feed
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub announcements: Vec<Announcement>,
    pub loading: bool,
    pub error: Option<String>,
    /// Announcement whose actions menu is open
    pub open_menu: Option<u64>,
    pub delete_flow: DeleteFlow,
    /// Announcement being edited in the modal
    pub editing: Option<Announcement>,
    generation: u64,
}

impl DashboardState {
    /// Dispatch a feed fetch; returns its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    pub fn apply_announcements(&mut self, generation: u64, announcements: Vec<Announcement>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.announcements = announcements;
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    // ==================== Menu ====================

    /// Open one card's menu, or close it when already open
    pub fn toggle_menu(&mut self, id: u64) {
        self.open_menu = if self.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    // ==================== Delete flow ====================

    /// Idle -> ConfirmPending. Ignored while a delete is already underway.
    pub fn request_delete(&mut self, id: u64) {
        if self.delete_flow == DeleteFlow::Idle {
            self.delete_flow = DeleteFlow::ConfirmPending { id };
        }
    }

    /// ConfirmPending -> Idle
    pub fn cancel_delete(&mut self) {
        if matches!(self.delete_flow, DeleteFlow::ConfirmPending { .. }) {
            self.delete_flow = DeleteFlow::Idle;
        }
    }

    /// ConfirmPending -> InFlight; yields the id to send
    pub fn confirm_delete(&mut self) -> Option<u64> {
        match self.delete_flow {
            DeleteFlow::ConfirmPending { id } => {
                self.delete_flow = DeleteFlow::InFlight { id };
                Some(id)
            }
            _ => None,
        }
    }

    /// Back to Idle once the call settles, success or not
    pub fn finish_delete(&mut self) {
        self.delete_flow = DeleteFlow::Idle;
    }

    /// Id awaiting user confirmation, if any
    pub fn pending_confirm(&self) -> Option<u64> {
        match self.delete_flow {
            DeleteFlow::ConfirmPending { id } => Some(id),
            _ => None,
        }
    }

    // ==================== Edit modal ====================

    pub fn open_editor(&mut self, announcement: Announcement) {
        self.editing = Some(announcement);
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use chrono::Utc;

    fn announcement(id: u64) -> Announcement {
        Announcement {
            id,
            state_id: "AF32142".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            call_sign: Some(132),
            created_at: Utc::now(),
            contents: Document::default(),
        }
    }

    #[test]
    fn test_delete_flow_happy_path() {
        let mut state = DashboardState::default();
        assert_eq!(state.delete_flow, DeleteFlow::Idle);

        state.request_delete(7);
        assert_eq!(state.pending_confirm(), Some(7));

        assert_eq!(state.confirm_delete(), Some(7));
        assert_eq!(state.delete_flow, DeleteFlow::InFlight { id: 7 });
        // Confirming again yields nothing to send
        assert_eq!(state.confirm_delete(), None);

        state.finish_delete();
        assert_eq!(state.delete_flow, DeleteFlow::Idle);
    }

    #[test]
    fn test_delete_flow_cancel() {
        let mut state = DashboardState::default();
        state.request_delete(7);
        state.cancel_delete();
        assert_eq!(state.delete_flow, DeleteFlow::Idle);
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn test_confirm_without_request_sends_nothing() {
        // A delete that was never requested (e.g. disabled menu) has no id
        // to send, so no remote call can be issued.
        let mut state = DashboardState::default();
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.delete_flow, DeleteFlow::Idle);
    }

    #[test]
    fn test_delete_request_ignored_while_in_flight() {
        let mut state = DashboardState::default();
        state.request_delete(7);
        state.confirm_delete();

        state.request_delete(9);
        assert_eq!(state.delete_flow, DeleteFlow::InFlight { id: 7 });
    }

    #[test]
    fn test_cancel_does_not_abort_in_flight_call() {
        let mut state = DashboardState::default();
        state.request_delete(7);
        state.confirm_delete();
        state.cancel_delete();
        assert_eq!(state.delete_flow, DeleteFlow::InFlight { id: 7 });
    }

    #[test]
    fn test_menu_toggling() {
        let mut state = DashboardState::default();
        state.toggle_menu(1);
        assert_eq!(state.open_menu, Some(1));
        // Opening another card's menu moves it
        state.toggle_menu(2);
        assert_eq!(state.open_menu, Some(2));
        state.toggle_menu(2);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn test_stale_feed_resolution_discarded() {
        let mut state = DashboardState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(!state.apply_announcements(first, vec![announcement(1)]));
        assert!(state.announcements.is_empty());
        assert!(state.apply_announcements(second, vec![announcement(2)]));
        assert_eq!(state.announcements[0].id, 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_editor_open_close() {
        let mut state = DashboardState::default();
        state.open_editor(announcement(3));
        assert_eq!(state.editing.as_ref().map(|a| a.id), Some(3));
        state.close_editor();
        assert!(state.editing.is_none());
    }
}
