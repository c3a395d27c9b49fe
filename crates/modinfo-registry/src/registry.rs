//! Mod Registry
//!
//! Ordered, read-only collection of mod records with lookup helpers.

use crate::types::{ModInfo, ModStatus};

/// Ordered collection of mod records, kept in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModRegistry {
    mods: Vec<ModInfo>,
}

impl ModRegistry {
    pub fn new(mods: Vec<ModInfo>) -> Self {
        Self { mods }
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn as_slice(&self) -> &[ModInfo] {
        &self.mods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModInfo> {
        self.mods.iter()
    }

    /// First record with exactly this name
    pub fn find(&self, name: &str) -> Option<&ModInfo> {
        self.mods.iter().find(|m| m.name == name)
    }

    /// Records with the given status, in source order
    pub fn with_status(&self, status: ModStatus) -> impl Iterator<Item = &ModInfo> + '_ {
        self.mods.iter().filter(move |m| m.status == status)
    }

    /// Records whose status applies on `server`, universal records included
    pub fn for_server<'a>(&'a self, server: &'a str) -> impl Iterator<Item = &'a ModInfo> + 'a {
        self.mods.iter().filter(move |m| m.applies_to(server))
    }

    /// Number of records per status, in [`ModStatus::ALL`] order
    pub fn status_counts(&self) -> [(ModStatus, usize); 4] {
        ModStatus::ALL.map(|status| (status, self.with_status(status).count()))
    }

    /// Serialize back to the source JSON form, preserving record order
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.mods)
    }
}

impl<'a> IntoIterator for &'a ModRegistry {
    type Item = &'a ModInfo;
    type IntoIter = std::slice::Iter<'a, ModInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.mods.iter()
    }
}
