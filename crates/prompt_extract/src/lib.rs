pub mod catalog;
pub mod error;
pub mod extract;

pub use catalog::PromptCatalog;
pub use error::ExtractError;
pub use extract::key::{AgentKind, Country, PromptKey};
pub use extract::prompts::ExtractedPrompts;
pub use extract::{ExtractConfig, ExtractReport, PromptExtractor};
