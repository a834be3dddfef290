//! CLI interface for the resume ATS analyzer

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "ATS resume scoring with AI-powered improvement suggestions")]
#[command(
    long_about = "Score a resume against ATS heuristics, surface concrete issues, and ask a \
generative model for rewritten bullet points"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume for a target role and company
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job role, e.g. "Backend Engineer"
        #[arg(short = 'j', long)]
        role: String,

        /// Target company
        #[arg(short, long)]
        company: String,

        /// Optional job description file (TXT, MD)
        #[arg(short = 'd', long)]
        job_description: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Skip the generative model call (deterministic score only)
        #[arg(long)]
        no_ai: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(Path::new("a.pdf"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("a.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(Path::new("a.exe"), &["pdf"]).is_err());
        assert!(validate_file_extension(Path::new("noext"), &["pdf"]).is_err());
    }
}
