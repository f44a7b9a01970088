//! Command-line interface for the FNUX extractor.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::load_llm_config;
use crate::error::{FnuxError, Result};
use crate::extract::extract_medical_data;
use crate::llm::{generate_summary, OpenAiClient};
use crate::loader;
use crate::prompt::{build_prompt, render_sections};
use crate::types::MedicalData;

/// FNUX Extractor - Extract clinical facts from Danish FNUX XML exports.
#[derive(Parser)]
#[command(name = "fnux-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract clinical facts from a FNUX XML file and print them.
    Extract {
        /// Path to the FNUX XML file
        xml: PathBuf,

        /// Print the extracted data as JSON instead of text sections
        #[arg(long)]
        json: bool,
    },

    /// Extract clinical facts and generate an LLM summary.
    Summarize {
        /// Path to the FNUX XML file
        xml: PathBuf,

        /// Path to the LLM configuration file (default: standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the prompt confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { xml, json } => extract_command(&xml, json),
        Commands::Summarize { xml, config, yes } => {
            summarize_command(&xml, config.as_deref(), yes)
        }
    }
}

/// Load, parse, and extract a FNUX file.
fn load_data(xml_path: &Path) -> Result<MedicalData> {
    let source = loader::read_source(xml_path)?;
    let doc = loader::parse(&source)?;
    let data = extract_medical_data(&doc);

    if data.is_empty() {
        tracing::warn!(path = %xml_path.display(), "no clinical facts extracted");
    }

    Ok(data)
}

/// Execute the extract command.
fn extract_command(xml_path: &Path, json: bool) -> Result<()> {
    let data = load_data(xml_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!("{}", render_sections(&data));
    }

    Ok(())
}

/// Execute the summarize command.
fn summarize_command(xml_path: &Path, config_path: Option<&Path>, yes: bool) -> Result<()> {
    // Validate configuration before touching the XML
    let config = load_llm_config(config_path)?;
    let data = load_data(xml_path)?;

    let user_prompt = build_prompt(&data, &config.llm.prompt.format_instructions);

    println!("\n=== LLM Prompt Preview ===");
    println!("{user_prompt}");
    println!("===========================");

    if !yes && std::io::stdin().is_terminal() {
        if !confirm_send()? {
            return Err(FnuxError::Aborted);
        }
    } else {
        println!("\nAutomatisk godkendt (ikke-interaktiv tilstand)");
    }

    let client = OpenAiClient::new(&config.llm)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Genererer resume...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match generate_summary(&client, &config.llm, &data) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!();
    println!("{}", style("=== Medicinsk Resume ===").green().bold());
    println!("{summary}");

    Ok(())
}

/// Ask for confirmation on stdin. Accepts `j` (ja) as approval.
fn confirm_send() -> Result<bool> {
    print!("\nSend denne prompt til LLM? (j/n): ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("j"))
}
