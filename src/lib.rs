//! MDT GUI Client Library
//!
//! Desktop MDT (Mobile Data Terminal) client: an officer roster and an
//! announcement feed rendered with GPUI, talking to the game host over an
//! opaque request/response bridge.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
