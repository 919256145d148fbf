//! Host Bridge
//!
//! The opaque request/response channel to the game-client host. A call is an
//! action name plus a JSON payload and resolves to a JSON reply. The trait is
//! the injection seam: production uses HTTP (NUI-style `{base_url}/{action}`
//! POSTs), demos and tests inject [`MockBridge`] instead of branching on a
//! debug flag at call sites.

use std::sync::Mutex;
use std::time::Duration;

use ahash::AHashMap;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::{Error, Result};

/// One request/response channel to the host
pub trait HostBridge: Send + Sync + 'static {
    /// Issue one request and resolve the host's JSON reply
    fn call(&self, action: &str, payload: Value) -> BoxFuture<'static, Result<Value>>;
}

/// Production bridge: JSON POST to `{base_url}/{action}`
pub struct NuiBridge {
    base_url: String,
    client: reqwest::Client,
}

impl NuiBridge {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl HostBridge for NuiBridge {
    fn call(&self, action: &str, payload: Value) -> BoxFuture<'static, Result<Value>> {
        let url = format!("{}/{}", self.base_url, action);
        let client = self.client.clone();
        let action = action.to_string();

        Box::pin(async move {
            tracing::debug!(action = %action, "bridge call");
            let response = client.post(&url).json(&payload).send().await?;
            let value = response.error_for_status()?.json::<Value>().await?;
            Ok(value)
        })
    }
}

/// Test-double bridge with canned per-action replies and optional simulated
/// latency. Records every issued action so tests can assert what was (not)
/// called.
#[derive(Default)]
pub struct MockBridge {
    responses: AHashMap<String, Value>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock seeded with the offline demo dataset: a nine-officer roster
    /// reported three rows at a time, and a two-entry announcement feed.
    pub fn seeded() -> Self {
        use crate::constants::actions;

        let officers = serde_json::json!([
            {
                "stateId": "AF32142", "firstName": "John", "lastName": "Doe",
                "callSign": 132, "title": "LSPD Sergeant", "unitId": 3,
                "playerId": 1, "position": [0.0, 0.0, 0.0]
            },
            {
                "stateId": "QE32142", "firstName": "Jane", "lastName": "Doe",
                "callSign": 141, "title": "BCSO Deputy", "unitId": 3,
                "playerId": 2, "position": [0.0, 0.0, 0.0]
            },
            {
                "stateId": "CA92151", "firstName": "Ray", "lastName": "Ward",
                "title": "LSPD Lieutenant", "unitId": 1, "playerId": 3,
                "position": [0.0, 0.0, 0.0]
            }
        ]);

        let announcements = serde_json::json!([
            {
                "id": 1, "stateId": "AF32142", "firstName": "John", "lastName": "Doe",
                "callSign": 132, "createdAt": "2026-08-27T21:40:00Z",
                "contents": { "blocks": [
                    { "type": "heading", "text": "Patrol schedule", "level": 2 },
                    { "type": "paragraph", "text": "Night shift now starts at 22:00. Check the board before heading out." }
                ]}
            },
            {
                "id": 2, "stateId": "XK10293", "firstName": "Alex", "lastName": "Hart",
                "callSign": 104, "createdAt": "2026-08-28T09:15:00Z",
                "contents": { "blocks": [
                    { "type": "paragraph", "text": "Reminder: dash cams must be running during every traffic stop." }
                ]}
            }
        ]);

        Self::new()
            .on(
                actions::GET_INITIAL_ROSTER_PAGE,
                serde_json::json!({ "totalRecords": 9, "officers": officers.clone() }),
            )
            .on(actions::GET_ROSTER_PAGE, officers)
            .on(actions::GET_ANNOUNCEMENTS, announcements)
            .on(actions::DELETE_ANNOUNCEMENT, Value::Bool(true))
            .on(actions::SAVE_ANNOUNCEMENT, Value::Bool(true))
    }

    /// Canned reply for an action
    pub fn on(mut self, action: &str, response: Value) -> Self {
        self.responses.insert(action.to_string(), response);
        self
    }

    /// Delay every reply, to exercise loading states
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Actions issued so far, in program order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

impl HostBridge for MockBridge {
    fn call(&self, action: &str, _payload: Value) -> BoxFuture<'static, Result<Value>> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(action.to_string());

        let response = self.responses.get(action).cloned();
        let action = action.to_string();
        let delay = self.delay;

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            response.ok_or_else(|| Error::Bridge {
                message: format!("no mock reply for action '{action}'"),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_returns_canned_reply() {
        let bridge = MockBridge::new().on("getRosterPage", json!([]));

        let value = bridge
            .call("getRosterPage", json!(2))
            .await
            .expect("Mock call failed");
        assert_eq!(value, json!([]));
        assert_eq!(bridge.calls(), vec!["getRosterPage".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_rejects_unknown_action() {
        let bridge = MockBridge::new();
        let result = bridge.call("nope", Value::Null).await;
        assert!(matches!(result, Err(Error::Bridge { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_delay_is_applied() {
        let bridge = MockBridge::new()
            .on("getAnnouncements", json!([]))
            .with_delay(Duration::from_millis(2000));

        let started = tokio::time::Instant::now();
        bridge
            .call("getAnnouncements", Value::Null)
            .await
            .expect("Mock call failed");
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
