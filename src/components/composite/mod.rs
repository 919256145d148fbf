//! Composite Components

pub mod action_menu;
pub mod data_table;
pub mod modal;
