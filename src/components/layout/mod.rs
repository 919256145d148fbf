//! Layout Components

pub mod header;
pub mod sidebar;
