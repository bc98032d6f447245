use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prompt_extract::extract::{DEFAULT_OUTPUT_REL, DEFAULT_SOURCE_REL};
use prompt_extract::{AgentKind, Country, ExtractConfig, ExtractError, PromptCatalog, PromptExtractor};
use tracing_subscriber::EnvFilter;

/// Extracts hardcoded lawyer system prompts into a JSON file.
#[derive(Debug, Parser)]
#[command(name = "prompt_extract", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Extract prompts from the source file (default).
    Extract(ExtractArgs),
    /// Print the system prompt an agent would use.
    Show {
        #[arg(long)]
        agent: AgentKind,
        #[arg(long)]
        country: Country,
        /// Prompts JSON file; defaults to the extract output.
        #[arg(long)]
        prompts: Option<PathBuf>,
        #[arg(long, env = "PROMPT_EXTRACT_ROOT", default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
struct ExtractArgs {
    /// Directory the default source and output paths are resolved from.
    #[arg(long, env = "PROMPT_EXTRACT_ROOT", default_value = ".")]
    root: PathBuf,
    #[arg(long, env = "PROMPT_EXTRACT_SOURCE")]
    source: Option<PathBuf>,
    #[arg(long, env = "PROMPT_EXTRACT_OUTPUT")]
    output: Option<PathBuf>,
}

impl ExtractArgs {
    fn into_config(self) -> ExtractConfig {
        ExtractConfig {
            source: self.source.unwrap_or_else(|| self.root.join(DEFAULT_SOURCE_REL)),
            output: self.output.unwrap_or_else(|| self.root.join(DEFAULT_OUTPUT_REL)),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let code = match cli.cmd {
        None => extract(cli.extract),
        Some(Cmd::Extract(args)) => extract(args),
        Some(Cmd::Show {
            agent,
            country,
            prompts,
            root,
        }) => {
            show(agent, country, prompts.unwrap_or_else(|| root.join(DEFAULT_OUTPUT_REL)));
            0
        }
    };
    std::process::exit(code);
}

fn extract(args: ExtractArgs) -> i32 {
    let cfg = args.into_config();
    let report = match PromptExtractor::new().and_then(|ex| ex.run(&cfg)) {
        Ok(r) => r,
        Err(ExtractError::SourceNotFound(path)) => {
            println!("Error: Source file not found at {}", path.display());
            return 0;
        }
        Err(e) => {
            tracing::error!("extraction failed: {e}");
            return 1;
        }
    };

    println!("Extracting prompts from {}...", report.source.display());
    println!("\nExtracted {} prompts:", report.prompts.len());
    for line in report.prompts.summary_lines() {
        println!("{line}");
    }
    println!("\nSaved to {}", report.output.display());
    0
}

fn show(agent: AgentKind, country: Country, path: PathBuf) {
    let catalog = PromptCatalog::load(&path).unwrap_or_else(|e| {
        tracing::warn!("could not load lawyer prompts: {e}");
        PromptCatalog::default()
    });
    println!("{}", catalog.system_prompt(agent, country));
}
