//! SessionState - Signed-In Character and Permissions

use crate::domain::character::Character;
use crate::domain::config::Permissions;

/// Who is using the MDT and what they may do
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub character: Character,
    pub permissions: Permissions,
}

impl SessionState {
    pub fn new(character: Character, permissions: Permissions) -> Self {
        Self {
            character,
            permissions,
        }
    }
}
