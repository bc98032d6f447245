use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

use super::key::PromptKey;

const PREVIEW_CHARS: usize = 100;

/// Prompts found in one source file, keyed by agent/country.
///
/// A key is present only if its pattern matched. Iteration and JSON output
/// follow [`PromptKey::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedPrompts {
    entries: BTreeMap<PromptKey, String>,
}

impl ExtractedPrompts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: PromptKey, text: String) {
        self.entries.insert(key, text);
    }

    pub fn get(&self, key: PromptKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: PromptKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = PromptKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PromptKey, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Pretty JSON, two-space indent, no trailing newline.
    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Writes the JSON file, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<(), ExtractError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
        }
        let body = self.to_json()?;
        fs::write(path, body).map_err(|e| ExtractError::io(path, e))?;
        tracing::info!(path = %path.display(), count = self.len(), "wrote prompts");
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self, ExtractError> {
        let raw = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        Self::from_json(&raw)
    }

    /// One `  - key: N chars (preview...)` line per entry.
    pub fn summary_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, text)| {
                format!(
                    "  - {key}: {} chars ({}...)",
                    text.chars().count(),
                    preview(text, PREVIEW_CHARS)
                )
            })
            .collect()
    }
}

pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
