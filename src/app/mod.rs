//! Application Layer
//!
//! App initialization, window management, global entities, and the workspace.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod workspace;
