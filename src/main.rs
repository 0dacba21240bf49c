//! Command line front end for the edit log.
//!
//! ```bash
//! # Run the built-in scenario
//! edit-log example
//!
//! # Apply commands from a JSON file (or `-` for stdin)
//! edit-log run commands.json --pretty
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use edit_log::{scenario, Command, Document, EditLog};
use tracing_subscriber::EnvFilter;

/// Apply undoable edit commands to an id-to-string document.
#[derive(Parser)]
#[command(name = "edit-log")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in "Hello Universe" scenario.
    Example {
        /// Indent the resulting document.
        #[arg(long)]
        pretty: bool,
    },

    /// Apply a JSON array of commands to an empty document.
    Run {
        /// File holding the commands, `-` for stdin.
        path: PathBuf,

        /// Indent the resulting document.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Example { pretty } => {
            let commands = scenario::hello_universe();
            println!("Example:");
            for command in &commands {
                println!("  {}", command);
            }
            let document = run(&commands)?;
            println!("Document: {}", render(&document, pretty)?);
        }
        Commands::Run { path, pretty } => {
            let input = read_input(&path)?;
            let commands: Vec<Command> = serde_json::from_str(&input)
                .with_context(|| format!("failed to parse commands from {}", path.display()))?;
            let document = run(&commands)?;
            println!("{}", render(&document, pretty)?);
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(commands: &[Command]) -> Result<Document> {
    let mut log = EditLog::new();
    log.execute_all(commands)
        .context("failed to apply commands")?;
    tracing::info!(
        commands = commands.len(),
        entries = log.document().len(),
        "applied commands"
    );
    Ok(log.into_document())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read commands from stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render(document: &Document, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(rendered)
}
