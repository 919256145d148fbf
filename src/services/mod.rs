//! Service Layer
//!
//! Everything that talks to the outside world: the host bridge (opaque
//! request/response channel to the game client), the shared query cache,
//! and the tokio runtime bridge gpui tasks use to reach them.
//!
//! ```text
//! page/controller ──> ServiceHub ──> HostBridge (HTTP or mock)
//!                          │
//!                          └──> QueryCache (keyed, invalidate-by-key)
//! ```

pub mod bridge;
pub mod hub;
pub mod query_cache;
pub mod runtime;

pub use bridge::{HostBridge, MockBridge, NuiBridge};
pub use hub::ServiceHub;
pub use query_cache::QueryCache;
