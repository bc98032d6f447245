use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExtractError;

/// Which assistant surface a prompt drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgentKind {
    HomeChat,
    CaseAi,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::HomeChat, AgentKind::CaseAi];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::HomeChat => "home_chat",
            AgentKind::CaseAi => "case_ai",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        AgentKind::ALL
            .into_iter()
            .find(|a| a.as_str() == norm)
            .ok_or_else(|| ExtractError::UnknownAgent(s.to_string()))
    }
}

/// Jurisdiction a prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Uk,
    Usa,
    Canada,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Uk, Country::Usa, Country::Canada];

    /// Lower-case form used inside prompt keys.
    pub fn as_key(self) -> &'static str {
        match self {
            Country::Uk => "uk",
            Country::Usa => "usa",
            Country::Canada => "canada",
        }
    }

    /// Upper-case form used in the source file and in fallback prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Country::Uk => "UK",
            Country::Usa => "USA",
            Country::Canada => "CANADA",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Country {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        Country::ALL
            .into_iter()
            .find(|c| c.as_key() == norm)
            .ok_or_else(|| ExtractError::UnknownCountry(s.to_string()))
    }
}

/// One of the six agent/country combinations, e.g. `case_ai_usa`.
///
/// Ordering follows [`PromptKey::ALL`], which is also the order keys are
/// written to the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PromptKey {
    pub agent: AgentKind,
    pub country: Country,
}

impl PromptKey {
    pub const ALL: [PromptKey; 6] = [
        PromptKey::new(AgentKind::HomeChat, Country::Uk),
        PromptKey::new(AgentKind::HomeChat, Country::Usa),
        PromptKey::new(AgentKind::HomeChat, Country::Canada),
        PromptKey::new(AgentKind::CaseAi, Country::Uk),
        PromptKey::new(AgentKind::CaseAi, Country::Usa),
        PromptKey::new(AgentKind::CaseAi, Country::Canada),
    ];

    pub const fn new(agent: AgentKind, country: Country) -> Self {
        Self { agent, country }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.agent.as_str(), self.country.as_key())
    }
}

impl FromStr for PromptKey {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKey::ALL
            .into_iter()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| ExtractError::UnknownKey(s.to_string()))
    }
}

impl Serialize for PromptKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PromptKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
