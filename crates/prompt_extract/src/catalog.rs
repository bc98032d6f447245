use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::extract::key::{AgentKind, Country, PromptKey};

/// Prompts loaded back from the extracted JSON, used to pick the system
/// prompt for an agent.
///
/// Keys outside the six known combinations are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    prompts: BTreeMap<String, String>,
}

impl PromptCatalog {
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let raw = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "loaded prompt catalog");
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            prompts: serde_json::from_str(raw)?,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.prompts.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Stored prompt for the agent/country, or the generic lawyer prompt.
    pub fn system_prompt(&self, agent: AgentKind, country: Country) -> Cow<'_, str> {
        let key = PromptKey::new(agent, country).to_string();
        match self.get(&key) {
            Some(p) if !p.is_empty() => {
                tracing::debug!(%key, chars = p.chars().count(), "using stored prompt");
                Cow::Borrowed(p)
            }
            _ => {
                tracing::warn!(%key, "no prompt found, using fallback");
                Cow::Owned(fallback_prompt(country))
            }
        }
    }
}

pub fn fallback_prompt(country: Country) -> String {
    let c = country.display_name();
    [
        format!("You are the JustHemis Lawyer AI - an elite legal AI assistant specializing in {c} law."),
        String::new(),
        "Your role is to:".to_string(),
        "1. Answer legal questions with precision and depth".to_string(),
        "2. Cite relevant laws, statutes, and legal principles".to_string(),
        "3. Explain complex legal concepts clearly".to_string(),
        "4. Provide practical legal guidance".to_string(),
        "5. Reference case law and precedents when relevant".to_string(),
        String::new(),
        format!("You have expertise in {c} law including:"),
        "- Criminal law, civil law, contract law, tort law".to_string(),
        "- Defamation, employment law, data protection".to_string(),
        "- Court procedures and legal strategy".to_string(),
        String::new(),
        "When answering:".to_string(),
        "- Be thorough and comprehensive".to_string(),
        "- Cite specific laws and legal principles".to_string(),
        "- Explain the reasoning behind legal rules".to_string(),
        "- Provide practical implications".to_string(),
        "- Use professional legal terminology appropriately".to_string(),
        "- Structure responses clearly with headings if needed".to_string(),
        String::new(),
        "Remember: You are being tested on your legal knowledge, so demonstrate deep understanding of the law.".to_string(),
    ]
    .join("\n")
}
