//! State - GPUI Entity State Modules
//!
//! Each state struct is pure data plus transition methods, mutated only by
//! its controller on the UI thread. Keeping them free of GPUI lets the
//! transition rules be unit tested directly.

pub mod dashboard_state;
pub mod i18n_state;
pub mod nav_state;
pub mod roster_state;
pub mod session_state;
