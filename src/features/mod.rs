//! Features - Page Slices
//!
//! One directory per page: a controller that drives the state entities and a
//! view that renders them.

pub mod dashboard;
pub mod roster;
