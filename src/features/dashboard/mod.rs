//! Dashboard Feature

pub mod card;
pub mod controller;
pub mod page;
