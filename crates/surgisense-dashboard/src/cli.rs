//! Command-line surface of the `surgisense` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SurgiSense recovery dashboard
///
/// Uploads discharge summaries, wound photos and voice recordings to the
/// SurgiSense backend and shows what comes back.
#[derive(Parser)]
#[command(name = "surgisense")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides SURGISENSE_API_BASE and the config file)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract a severity score from an assessment text ("-" reads stdin)
    Classify { text: String },

    /// Scan a discharge summary (PDF or TXT) for surgery details
    Scan { file: PathBuf },

    /// Digitize a discharge summary PDF into the discharge card
    Digitize { file: PathBuf },

    /// Analyze a wound photo and show its severity
    Wound { image: PathBuf },

    /// Transcribe a voice recording
    Transcribe { audio: PathBuf },

    /// Ask about the scanned document; reads questions from stdin when none is given
    Chat { question: Vec<String> },

    /// Show the patient header and backend in use
    Dashboard,

    /// Manage the saved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the saved configuration
    Show,

    /// Save the backend base URL
    SetApiBase { url: String },

    /// Save the patient recovery header
    SetRecovery {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        surgery: String,
        /// Surgery date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Expected recovery period in days
        #[arg(long, default_value_t = 90)]
        days: u32,
    },

    /// Delete the saved configuration
    Reset,
}
