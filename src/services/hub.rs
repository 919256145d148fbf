//! Service Hub
//!
//! Owns the host bridge and the query cache and exposes the typed operations
//! pages call. Registered as a GPUI global at startup; controllers clone it
//! into background tasks.

use std::sync::Arc;

use gpui::Global;
use serde_json::{Value, json};

use crate::constants::{QUERY_ANNOUNCEMENTS, actions};
use crate::domain::announcement::Announcement;
use crate::domain::config::BridgeConfig;
use crate::domain::officer::{InitialRosterPage, RosterOfficer};
use crate::error::Result;
use crate::services::bridge::{HostBridge, MockBridge, NuiBridge};
use crate::services::query_cache::QueryCache;

/// Central access point for bridge calls and cached collections
#[derive(Clone)]
pub struct ServiceHub {
    bridge: Arc<dyn HostBridge>,
    cache: Arc<QueryCache>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            bridge,
            cache: Arc::new(QueryCache::new()),
        }
    }

    /// Build the hub from config: HTTP bridge against the host, or the
    /// seeded mock for development without one.
    pub fn from_config(config: &BridgeConfig) -> Self {
        if config.mock {
            tracing::info!(delay_ms = config.mock_delay_ms, "using seeded mock bridge");
            let delay = std::time::Duration::from_millis(config.mock_delay_ms);
            Self::new(Arc::new(MockBridge::seeded().with_delay(delay)))
        } else {
            tracing::info!(base_url = %config.base_url, "using HTTP bridge");
            Self::new(Arc::new(NuiBridge::new(config.base_url.clone())))
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // ==================== Roster ====================

    /// First page plus the authoritative total count
    pub async fn get_initial_roster_page(&self) -> Result<InitialRosterPage> {
        let value = self
            .bridge
            .call(actions::GET_INITIAL_ROSTER_PAGE, Value::Null)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// One page of roster rows; does not refresh the total count
    pub async fn get_roster_page(&self, page: usize) -> Result<Vec<RosterOfficer>> {
        let value = self.bridge.call(actions::GET_ROSTER_PAGE, json!(page)).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ==================== Announcements ====================

    /// Announcement feed, served through the query cache (refetches when the
    /// key is missing or invalidated).
    pub async fn get_announcements(&self) -> Result<Vec<Announcement>> {
        let value = self
            .cache
            .read_or_fetch(QUERY_ANNOUNCEMENTS, || {
                self.bridge.call(actions::GET_ANNOUNCEMENTS, Value::Null)
            })
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Explicit refresh: drop the cached feed first so the fetch always
    /// reaches the bridge, even while the entry is still fresh.
    pub async fn refresh_announcements(&self) -> Result<Vec<Announcement>> {
        self.cache.invalidate(QUERY_ANNOUNCEMENTS);
        self.get_announcements().await
    }

    /// Delete an announcement. A falsy reply means the host refused; local
    /// state stays untouched. A truthy reply invalidates the cached feed.
    pub async fn delete_announcement(&self, id: u64) -> Result<bool> {
        let value = self
            .bridge
            .call(actions::DELETE_ANNOUNCEMENT, json!(id))
            .await?;
        let deleted = value.as_bool().unwrap_or(false);
        if deleted {
            self.cache.invalidate(QUERY_ANNOUNCEMENTS);
        } else {
            tracing::debug!(id, "host refused announcement delete");
        }
        Ok(deleted)
    }

    /// Save edited contents; invalidates the cached feed on success
    pub async fn save_announcement(&self, announcement: &Announcement) -> Result<bool> {
        let value = self
            .bridge
            .call(actions::SAVE_ANNOUNCEMENT, serde_json::to_value(announcement)?)
            .await?;
        let saved = value.as_bool().unwrap_or(false);
        if saved {
            self.cache.invalidate(QUERY_ANNOUNCEMENTS);
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROSTER_PAGE_SIZE;

    fn seeded_hub() -> ServiceHub {
        ServiceHub::new(Arc::new(MockBridge::seeded()))
    }

    #[tokio::test]
    async fn test_initial_load_applies_count_and_rows() {
        // Seeded mock reports nine officers total, three rows on page one
        let page = seeded_hub()
            .get_initial_roster_page()
            .await
            .expect("Initial load failed");

        assert_eq!(page.total_records, 9);
        assert_eq!(page.officers.len(), 3);
        assert!(page.officers.len() <= ROSTER_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_same_page_twice_is_identical() {
        // Unchanged backing data yields identical rows
        let hub = seeded_hub();
        let first = hub.get_roster_page(1).await.expect("Page fetch failed");
        let second = hub.get_roster_page(1).await.expect("Page fetch failed");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_roster_rows_have_unique_keys() {
        let page = seeded_hub()
            .get_initial_roster_page()
            .await
            .expect("Initial load failed");

        let mut ids: Vec<_> = page.officers.iter().map(|o| &o.state_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), page.officers.len());
    }

    #[tokio::test]
    async fn test_delete_truthy_invalidates_feed() {
        // Truthy delete reply invalidates the cached feed
        let hub = seeded_hub();
        hub.get_announcements().await.expect("Feed fetch failed");
        assert_eq!(hub.cache().epoch(QUERY_ANNOUNCEMENTS), 1);

        let deleted = hub.delete_announcement(1).await.expect("Delete failed");
        assert!(deleted);
        assert!(hub.cache().is_stale(QUERY_ANNOUNCEMENTS));

        // Next read refetches
        hub.get_announcements().await.expect("Feed fetch failed");
        assert_eq!(hub.cache().epoch(QUERY_ANNOUNCEMENTS), 2);
    }

    #[tokio::test]
    async fn test_delete_falsy_leaves_cache_untouched() {
        // Falsy delete reply leaves the cached feed fresh
        let bridge = MockBridge::seeded().on(actions::DELETE_ANNOUNCEMENT, json!(false));
        let hub = ServiceHub::new(Arc::new(bridge));
        hub.get_announcements().await.expect("Feed fetch failed");

        let deleted = hub.delete_announcement(1).await.expect("Delete failed");
        assert!(!deleted);
        assert!(!hub.cache().is_stale(QUERY_ANNOUNCEMENTS));
        assert_eq!(hub.cache().epoch(QUERY_ANNOUNCEMENTS), 1);
    }

    #[tokio::test]
    async fn test_feed_served_from_cache_between_invalidations() {
        let bridge = Arc::new(MockBridge::seeded());
        let hub = ServiceHub::new(bridge.clone());

        hub.get_announcements().await.expect("Feed fetch failed");
        hub.get_announcements().await.expect("Feed fetch failed");

        let feed_calls = bridge
            .calls()
            .iter()
            .filter(|a| *a == actions::GET_ANNOUNCEMENTS)
            .count();
        assert_eq!(feed_calls, 1);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_fresh_cache() {
        // A plain read would be served from the fresh entry; refresh must
        // reach the bridge again and leave a fresh entry behind.
        let bridge = Arc::new(MockBridge::seeded());
        let hub = ServiceHub::new(bridge.clone());

        hub.get_announcements().await.expect("Feed fetch failed");
        hub.refresh_announcements().await.expect("Refresh failed");

        let feed_calls = bridge
            .calls()
            .iter()
            .filter(|a| *a == actions::GET_ANNOUNCEMENTS)
            .count();
        assert_eq!(feed_calls, 2);
        assert!(!hub.cache().is_stale(QUERY_ANNOUNCEMENTS));
        assert_eq!(hub.cache().epoch(QUERY_ANNOUNCEMENTS), 2);
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_never_reaches_bridge() {
        // A delete that was never requested yields no id, so the gate in
        // front of the remote call stays shut.
        let bridge = Arc::new(MockBridge::seeded());
        let hub = ServiceHub::new(bridge.clone());

        let mut state = crate::state::dashboard_state::DashboardState::default();
        if let Some(id) = state.confirm_delete() {
            hub.delete_announcement(id).await.expect("Delete failed");
        }

        assert!(
            !bridge
                .calls()
                .iter()
                .any(|a| a == actions::DELETE_ANNOUNCEMENT)
        );
    }
}
