pub mod key;
pub mod patterns;
pub mod prompts;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

use key::PromptKey;
use patterns::PromptPattern;
use prompts::ExtractedPrompts;

/// Source file location relative to the tool's root directory.
pub const DEFAULT_SOURCE_REL: &str = "../MPC_server/server/defense_lawyer/defense_lawyer_client.py";
/// Output file location relative to the tool's root directory.
pub const DEFAULT_OUTPUT_REL: &str = "backend/lawyer_prompts.json";

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl ExtractConfig {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source: root.join(DEFAULT_SOURCE_REL),
            output: root.join(DEFAULT_OUTPUT_REL),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}

#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub prompts: ExtractedPrompts,
}

pub struct PromptExtractor {
    patterns: Vec<PromptPattern>,
}

impl PromptExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            patterns: patterns::compile_all()?,
        })
    }

    pub fn extract_str(&self, content: &str) -> ExtractedPrompts {
        let mut out = ExtractedPrompts::new();
        for pat in &self.patterns {
            match pat.find(content) {
                Some(text) => {
                    tracing::debug!(key = %pat.key, chars = text.chars().count(), "pattern matched");
                    out.insert(pat.key, text);
                }
                None => tracing::debug!(key = %pat.key, "pattern not found"),
            }
        }
        out
    }

    pub fn extract_file(&self, path: &Path) -> Result<ExtractedPrompts, ExtractError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::SourceNotFound(path.to_path_buf()),
            _ => ExtractError::io(path, e),
        })?;
        Ok(self.extract_str(&content))
    }

    /// Extracts from `cfg.source` and writes `cfg.output`.
    ///
    /// Nothing is written when the source is missing.
    pub fn run(&self, cfg: &ExtractConfig) -> Result<ExtractReport, ExtractError> {
        if !cfg.source.exists() {
            return Err(ExtractError::SourceNotFound(cfg.source.clone()));
        }
        tracing::info!(source = %cfg.source.display(), "extracting prompts");
        let prompts = self.extract_file(&cfg.source)?;
        prompts.write_json(&cfg.output)?;
        Ok(ExtractReport {
            source: cfg.source.clone(),
            output: cfg.output.clone(),
            prompts,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = PromptKey> + '_ {
        self.patterns.iter().map(|p| p.key)
    }
}
