//! Settings-layer errors for snapshot persistence operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsErrorKind {
    Storage,
    Serialization,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsError {
    pub kind: SettingsErrorKind,
    pub message: String,
}

impl SettingsError {
    pub fn new(kind: SettingsErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(SettingsErrorKind::Storage, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(SettingsErrorKind::Serialization, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(SettingsErrorKind::Other, message)
    }
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SettingsError {}
