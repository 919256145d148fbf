//! Domain - Pure Data Structures and Bridge Payload Types
//!
//! These types don't depend on GPUI and mirror what the host sends.

pub mod announcement;
pub mod character;
pub mod config;
pub mod document;
pub mod officer;
