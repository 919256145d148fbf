//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here. Splitting state by update
//! frequency keeps page redraws scoped to what actually changed.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    dashboard_state::DashboardState, i18n_state::I18nState, nav_state::NavState,
    roster_state::RosterState, session_state::SessionState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Sidebar navigation state
    pub nav: Entity<NavState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Signed-in character and permissions
    pub session: Entity<SessionState>,
    /// Roster table state
    pub roster: Entity<RosterState>,
    /// Announcement feed state
    pub dashboard: Entity<DashboardState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(session: SessionState, cx: &mut App) -> Self {
        Self {
            nav: cx.new(|_| NavState::default()),
            i18n: cx.new(|_| I18nState::default()),
            session: cx.new(|_| session),
            roster: cx.new(|_| RosterState::new()),
            dashboard: cx.new(|_| DashboardState::default()),
        }
    }
}
