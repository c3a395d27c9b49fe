//! Mod Record Types
//!
//! Rust structs matching the bundled `modinfo.json` record shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Allowance classification assigned to a mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModStatus {
    Allowed,
    Disallowed,
    PartiallyAllowed,
    Unknown,
}

impl ModStatus {
    /// Every status, in declaration order
    pub const ALL: [ModStatus; 4] = [
        ModStatus::Allowed,
        ModStatus::Disallowed,
        ModStatus::PartiallyAllowed,
        ModStatus::Unknown,
    ];

    /// Wire name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ModStatus::Allowed => "allowed",
            ModStatus::Disallowed => "disallowed",
            ModStatus::PartiallyAllowed => "partially_allowed",
            ModStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mod status '{0}' (expected allowed, disallowed, partially_allowed or unknown)")]
pub struct ParseStatusError(pub String);

impl FromStr for ModStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// One mod known to the registry
///
/// Only `name` and `status` are required. Absent optional fields are `None`
/// and are omitted again on serialization, so an explicitly empty string in
/// the source survives as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modrinth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curseforge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub status: ModStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Servers this record's status is scoped to; `None` means every server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Vec<String>>,
}

impl ModInfo {
    /// Minimal record with every optional field absent
    pub fn new(name: impl Into<String>, status: ModStatus) -> Self {
        Self {
            name: name.into(),
            url: None,
            modrinth: None,
            curseforge: None,
            version: None,
            icon: None,
            status,
            note: None,
            server: None,
        }
    }

    pub fn is_universal(&self) -> bool {
        self.server.is_none()
    }

    /// Whether this record's status applies on `server`.
    ///
    /// Server names are compared exactly, with no case folding or trimming.
    pub fn applies_to(&self, server: &str) -> bool {
        match &self.server {
            None => true,
            Some(servers) => servers.iter().any(|s| s == server),
        }
    }

    /// Validate record structure beyond what deserialization enforces
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Mod name cannot be empty".to_string());
        }
        Ok(())
    }
}
