//! Roster Controller
//!
//! Drives the roster table's fetch lifecycle. Every dispatch records a
//! generation on the state; the matching resolution is applied through the
//! state's `apply_*` methods, which discard anything stale.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::officer::RosterOfficer;
use crate::services::runtime::run_in_tokio;
use crate::services::ServiceHub;

/// Roster page controller
#[derive(Clone)]
pub struct RosterController {
    entities: AppEntities,
}

impl RosterController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Mount-time load: first page plus the authoritative total count
    pub fn load_initial(&self, cx: &mut App) {
        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("service hub not initialized");
            return;
        };

        let roster = self.entities.roster.clone();
        let generation = roster.update(cx, |state, cx| {
            let generation = state.begin_initial_fetch();
            cx.notify();
            generation
        });

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { hub.get_initial_roster_page().await }).await;
            let _ = roster.update(cx, |state, cx| {
                let applied = match result {
                    Ok(page) => state.apply_initial(generation, page),
                    Err(e) => {
                        tracing::warn!(error = %e, "initial roster load failed");
                        state.apply_error(generation, e.to_string())
                    }
                };
                if applied {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    /// Fetch one page of rows. The page indicator moves immediately; the
    /// total count is left to the initial load.
    pub fn change_page(&self, page: usize, cx: &mut App) {
        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("service hub not initialized");
            return;
        };

        let roster = self.entities.roster.clone();
        let generation = roster.update(cx, |state, cx| {
            let generation = state.begin_page_fetch(page);
            cx.notify();
            generation
        });

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { hub.get_roster_page(page).await }).await;
            let _ = roster.update(cx, |state, cx| {
                let applied = match result {
                    Ok(officers) => state.apply_page(generation, officers),
                    Err(e) => {
                        tracing::warn!(error = %e, page, "roster page load failed");
                        state.apply_error(generation, e.to_string())
                    }
                };
                if applied {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    /// Open or close one row's actions menu
    pub fn toggle_menu(&self, state_id: String, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.toggle_menu(&state_id);
            cx.notify();
        });
    }

    /// Show the details overlay for one officer
    pub fn open_details(&self, officer: RosterOfficer, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.open_details(officer);
            cx.notify();
        });
    }

    pub fn close_details(&self, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.close_details();
            cx.notify();
        });
    }

    /// Retry after a failed fetch: re-issue for the page the user is on
    pub fn retry(&self, cx: &mut App) {
        let current = self.entities.roster.read(cx).current_page;
        if current <= 1 && self.entities.roster.read(cx).total_records == 0 {
            self.load_initial(cx);
        } else {
            self.change_page(current, cx);
        }
    }
}
