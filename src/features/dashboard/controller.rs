//! Dashboard Controller
//!
//! Drives the announcement feed: cache-backed loads, the delete confirmation
//! flow and the edit modal. Remote verdicts are authoritative; a refused
//! delete or save changes nothing locally.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::announcement::Announcement;
use crate::services::ServiceHub;
use crate::services::runtime::run_in_tokio;

/// Dashboard page controller
#[derive(Clone)]
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load the feed through the query cache. A fresh cache entry resolves
    /// without touching the bridge; a stale one refetches.
    pub fn load(&self, cx: &mut App) {
        self.fetch(false, cx);
    }

    /// User-initiated refresh: invalidates the cached feed first, so the
    /// fetch always reaches the bridge even while the entry is fresh.
    pub fn refresh(&self, cx: &mut App) {
        self.fetch(true, cx);
    }

    fn fetch(&self, force: bool, cx: &mut App) {
        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("service hub not initialized");
            return;
        };

        let dashboard = self.entities.dashboard.clone();
        let generation = dashboard.update(cx, |state, cx| {
            let generation = state.begin_fetch();
            cx.notify();
            generation
        });

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move {
                if force {
                    hub.refresh_announcements().await
                } else {
                    hub.get_announcements().await
                }
            })
            .await;
            let _ = dashboard.update(cx, |state, cx| {
                let applied = match result {
                    Ok(announcements) => state.apply_announcements(generation, announcements),
                    Err(e) => {
                        tracing::warn!(error = %e, "announcement feed load failed");
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

    /// Open or close one card's actions menu
    pub fn toggle_menu(&self, id: u64, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.toggle_menu(id);
            cx.notify();
        });
    }

    // ==================== Delete flow ====================

    /// Show the confirmation dialog for one announcement
    pub fn request_delete(&self, id: u64, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.close_menu();
            state.request_delete(id);
            cx.notify();
        });
    }

    pub fn cancel_delete(&self, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.cancel_delete();
            cx.notify();
        });
    }

    /// Send the confirmed delete. On a truthy reply the hub has already
    /// invalidated the cached feed, so the reload refetches; on a falsy
    /// reply the feed is left exactly as it was.
    pub fn confirm_delete(&self, cx: &mut App) {
        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("service hub not initialized");
            return;
        };

        let dashboard = self.entities.dashboard.clone();
        let Some(id) = dashboard.update(cx, |state, cx| {
            let id = state.confirm_delete();
            cx.notify();
            id
        }) else {
            return;
        };

        let this = self.clone();
        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { hub.delete_announcement(id).await }).await;
            let deleted = match result {
                Ok(deleted) => deleted,
                Err(e) => {
                    tracing::warn!(error = %e, id, "announcement delete failed");
                    false
                }
            };

            let _ = cx.update(|cx| {
                dashboard.update(cx, |state, cx| {
                    state.finish_delete();
                    cx.notify();
                });
                if deleted {
                    this.load(cx);
                }
            });
        })
        .detach();
    }

    // ==================== Edit modal ====================

    pub fn open_editor(&self, announcement: Announcement, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.close_menu();
            state.open_editor(announcement);
            cx.notify();
        });
    }

    pub fn close_editor(&self, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.close_editor();
            cx.notify();
        });
    }

    /// Save the edited announcement and reload the feed on success
    pub fn save(&self, announcement: Announcement, cx: &mut App) {
        let Some(hub) = cx.try_global::<ServiceHub>().cloned() else {
            tracing::error!("service hub not initialized");
            return;
        };

        self.close_editor(cx);

        let this = self.clone();
        cx.spawn(async move |cx| {
            let result =
                run_in_tokio(async move { hub.save_announcement(&announcement).await }).await;
            let saved = match result {
                Ok(saved) => saved,
                Err(e) => {
                    tracing::warn!(error = %e, "announcement save failed");
                    false
                }
            };

            if saved {
                let _ = cx.update(|cx| this.load(cx));
            }
        })
        .detach();
    }
}
