//! Primitive Components

pub mod avatar;
pub mod button;
