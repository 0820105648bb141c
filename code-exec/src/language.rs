//! Mapping from language keys to backend language identifiers.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

use crate::error::Error;

/// Judge0 CE identifiers: `(key, display name, language_id)`
const JUDGE0_CE_LANGUAGES: &[(&str, &str, u32)] = &[
    ("c", "C (GCC 9.2.0)", 50),
    ("cpp", "C++ (GCC 9.2.0)", 54),
    ("csharp", "C# (Mono 6.6.0.161)", 51),
    ("go", "Go (1.13.5)", 60),
    ("java", "Java (OpenJDK 13.0.1)", 62),
    ("javascript", "JavaScript (Node.js 12.14.0)", 63),
    ("php", "PHP (7.4.1)", 68),
    ("python", "Python (3.8.1)", 71),
    ("rust", "Rust (1.40.0)", 73),
    ("swift", "Swift (5.2.3)", 83),
    ("typescript", "TypeScript (3.7.4)", 74),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Key callers use to select the language, e.g. `cpp`
    pub key: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
    /// Identifier the backend expects in `language_id`
    pub backend_id: u32,
}

/// Lookup table of supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    #[serde(rename = "language", default)]
    entries: Vec<LanguageEntry>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self {
            entries: JUDGE0_CE_LANGUAGES
                .iter()
                .map(|(key, name, backend_id)| LanguageEntry {
                    key: key.to_string(),
                    name: name.to_string(),
                    backend_id: *backend_id,
                })
                .collect(),
        }
    }
}

impl LanguageTable {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a language, replacing any existing entry with the same key
    pub fn with_language(mut self, key: &str, name: &str, backend_id: u32) -> Self {
        let entry = LanguageEntry {
            key: key.to_string(),
            name: name.to_string(),
            backend_id,
        };
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Resolve a language key to the backend identifier
    pub fn backend_id(&self, key: &str) -> Result<u32, Error> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.backend_id)
            .ok_or_else(|| Error::UnsupportedLanguage(key.to_string()))
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Parse a table from TOML:
    ///
    /// ```toml
    /// [[language]]
    /// key = "cpp"
    /// name = "C++ (GCC 9.2.0)"
    /// backend_id = 54
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let table: LanguageTable =
            toml::from_str(s).map_err(|e| Error::LanguageTable(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::LanguageTable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Err(Error::LanguageTable("no languages defined".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.key.trim().is_empty() {
                return Err(Error::LanguageTable("language key is empty".to_string()));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(Error::LanguageTable(format!(
                    "duplicate language key: {}",
                    entry.key
                )));
            }
        }
        Ok(())
    }
}
