use regex::Regex;

use crate::error::ExtractError;

use super::key::{AgentKind, Country, PromptKey};

// Home-screen prompts are anchored on the branch that assigns them and the log
// line that follows. Case prompts are anchored on their module-level constant.
const HOME_CHAT_UK: &str = r#"(?s)else:\s+base_instructions = add_current_datetime_to_prompt\("""(.*?)"""\)\s+logger\.info\(f"\[CHAT_SYSTEM_PROMPT\] Using UK home screen instructions"#;
const HOME_CHAT_USA: &str = r#"(?s)if user_country == 'USA':\s+base_instructions = add_current_datetime_to_prompt\("""(.*?)"""\)\s+logger\.info\(f"\[CHAT_SYSTEM_PROMPT\] Using USA home screen instructions"#;
const HOME_CHAT_CANADA: &str = r#"(?s)elif user_country == 'CANADA':\s+base_instructions = add_current_datetime_to_prompt\("""(.*?)"""\)\s+logger\.info\(f"\[CHAT_SYSTEM_PROMPT\] Using CANADA home screen instructions"#;
const CASE_AI_UK: &str = r#"(?s)UNIFIED_SYSTEM_PROMPT = """(.*?)""""#;
const CASE_AI_USA: &str = r#"(?s)UNIFIED_SYSTEM_PROMPT_USA = """(.*?)""""#;
const CASE_AI_CANADA: &str = r#"(?s)UNIFIED_SYSTEM_PROMPT_CANADA = """(.*?)""""#;

/// Raw pattern source for a key. Group 1 captures the prompt body.
pub fn pattern_source(key: PromptKey) -> &'static str {
    match (key.agent, key.country) {
        (AgentKind::HomeChat, Country::Uk) => HOME_CHAT_UK,
        (AgentKind::HomeChat, Country::Usa) => HOME_CHAT_USA,
        (AgentKind::HomeChat, Country::Canada) => HOME_CHAT_CANADA,
        (AgentKind::CaseAi, Country::Uk) => CASE_AI_UK,
        (AgentKind::CaseAi, Country::Usa) => CASE_AI_USA,
        (AgentKind::CaseAi, Country::Canada) => CASE_AI_CANADA,
    }
}

#[derive(Debug, Clone)]
pub struct PromptPattern {
    pub key: PromptKey,
    regex: Regex,
}

impl PromptPattern {
    pub fn compile(key: PromptKey) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern_source(key)).map_err(|source| ExtractError::Pattern {
            key: key.to_string(),
            source,
        })?;
        Ok(Self { key, regex })
    }

    /// Leftmost match, trimmed. `None` when the anchor is absent.
    pub fn find(&self, content: &str) -> Option<String> {
        let cap = self.regex.captures(content)?;
        Some(strip(cap.get(1)?.as_str()).to_string())
    }
}

/// Trims Unicode whitespace plus the ASCII separators U+001C..=U+001F.
pub fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

pub fn compile_all() -> Result<Vec<PromptPattern>, ExtractError> {
    PromptKey::ALL.into_iter().map(PromptPattern::compile).collect()
}
