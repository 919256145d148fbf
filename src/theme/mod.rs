//! Theme - Shared Visual Theme

pub mod colors;
pub mod typography;
