use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::shared::constants::LANGUAGE_STORAGE_KEY;
use crate::shared::types::Language;

/// Reader preferences persisted as a flat JSON object of string values.
///
/// Storage problems never fail the caller: reads fall back to detection and
/// writes are logged and dropped.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved language, else the language detected from `locale`, else English
    pub fn load_language(&self, locale: Option<&str>) -> Language {
        match self.read_entries() {
            Ok(entries) => {
                if let Some(saved) = entries.get(LANGUAGE_STORAGE_KEY) {
                    match saved.parse::<Language>() {
                        Ok(language) => return language,
                        Err(e) => tracing::warn!("Ignoring saved language preference: {}", e),
                    }
                }
            }
            Err(e) => tracing::warn!(
                "Failed to read language preference from {}: {}",
                self.path.display(),
                e
            ),
        }

        locale.map(Language::detect).unwrap_or_default()
    }

    /// Persist the reader's language; returns whether the write succeeded
    pub fn save_language(&self, language: Language) -> bool {
        match self.write_entry(LANGUAGE_STORAGE_KEY, language.code()) {
            Ok(()) => {
                tracing::debug!("Language preference saved: {}", language.code());
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to save language preference to {}: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }

    /// Missing file reads as empty
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the write
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
