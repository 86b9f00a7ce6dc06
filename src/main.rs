// Mockingbird - multi-perspective debate solver
// Main entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use mockingbird::agent::{DebateAgent, DebateConfig};
use mockingbird::cli::Narrator;
use mockingbird::config::load_config;
use mockingbird::generators::OllamaGenerator;
use mockingbird::memory::AttemptMemory;
use mockingbird::metrics::MetricsLogger;
use mockingbird::ollama::OllamaClient;
use mockingbird::tools::{ToolCatalog, ToolRegistry};

#[derive(Parser)]
#[command(
    name = "mockingbird",
    version,
    about = "Solve a problem with multi-perspective debate and value-guided retries"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the problem statement read from a file
    Solve {
        /// File containing the problem statement
        problem_file: PathBuf,

        /// Ollama model to use (overrides config)
        #[arg(long)]
        model: Option<String>,

        /// Maximum number of attempts (overrides config)
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Perspectives per attempt (overrides config)
        #[arg(long)]
        perspectives: Option<usize>,

        /// Suppress progress narration
        #[arg(long)]
        quiet: bool,
    },

    /// Discover builtin capabilities and write the registry JSON
    Tools {
        /// Where to write the registry
        #[arg(long, default_value = "tools_registry.json")]
        output: PathBuf,
    },

    /// Print the persisted attempt value table
    Memory,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            problem_file,
            model,
            max_attempts,
            perspectives,
            quiet,
        } => solve(problem_file, model, max_attempts, perspectives, quiet).await,
        Command::Tools { output } => discover_tools(&output),
        Command::Memory => show_memory(),
    }
}

async fn solve(
    problem_file: PathBuf,
    model: Option<String>,
    max_attempts: Option<usize>,
    perspectives: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let problem = std::fs::read_to_string(&problem_file)
        .with_context(|| format!("Failed to read problem file: {}", problem_file.display()))?
        .trim()
        .to_string();

    let mut config = load_config()?;
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(attempts) = max_attempts {
        config.max_attempts = attempts;
    }
    if let Some(count) = perspectives {
        config.perspective_count = count;
    }
    config.validate()?;

    let narrator = if quiet {
        Narrator::silent()
    } else {
        Narrator::new()
    };

    let catalog = ToolCatalog::load_or_empty(&config.tools_registry_path)?;
    if catalog.is_empty() {
        narrator.catalog_missing(&config.tools_registry_path);
    }

    let client = Arc::new(OllamaClient::new(&config.ollama_url)?);
    let generator = Arc::new(OllamaGenerator::new(client, config.model.clone()));
    let invoker = Arc::new(ToolRegistry::with_builtins()?);
    let memory = AttemptMemory::load(&config.memory_path)?;
    let metrics = MetricsLogger::new(config.metrics_dir.clone())?;

    let debate_config = DebateConfig {
        learning_rate: config.learning_rate,
        discount_factor: config.discount_factor,
        max_attempts: config.max_attempts,
        perspective_count: config.perspective_count,
        model: config.model.clone(),
    };

    let mut agent = DebateAgent::new(
        generator,
        invoker,
        catalog,
        memory,
        narrator,
        debate_config,
    )
    .with_metrics(metrics);

    let result = agent.solve(&problem).await?;

    println!("\n=== FINAL SOLUTION ===\n");
    println!("{}", result.solution);

    Ok(())
}

fn discover_tools(output: &PathBuf) -> Result<()> {
    let registry = ToolRegistry::with_builtins()?;
    let catalog = registry.catalog();
    catalog.save(output)?;

    println!(
        "Tools registered: {} capabilities written to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn show_memory() -> Result<()> {
    let config = load_config()?;
    let memory = AttemptMemory::load(&config.memory_path)?;

    if memory.is_empty() {
        println!(
            "Attempt value table is empty: {}",
            config.memory_path.display()
        );
        return Ok(());
    }

    println!("Attempt value table ({}):", config.memory_path.display());
    for (key, value) in memory.entries() {
        println!("  {key}: {value:.4}");
    }

    Ok(())
}
