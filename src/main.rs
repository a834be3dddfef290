//! resume-ats: ATS resume scoring with AI-powered improvement suggestions

use clap::Parser;
use log::{error, info};
use resume_ats::ai::{GeminiClient, GenerativeModel};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::manager::InputManager;
use resume_ats::output::assembler::ParsedResumeInfo;
use resume_ats::output::formatter;
use resume_ats::server;
use resume_ats::service::AnalysisService;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            company,
            job_description,
            output,
            no_ai,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeAtsError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(jd) = &job_description {
                cli::validate_file_extension(jd, &["txt", "md"]).map_err(|e| {
                    ResumeAtsError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAtsError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("extracted {} characters from {}", resume_text.len(), resume.display());

            let jd_text = match &job_description {
                Some(path) => Some(input_manager.extract_text(path).await?),
                None => None,
            };

            let model = build_model(&config, no_ai)?;
            let service = AnalysisService::new(model)?;

            let file_type = resume
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("text")
                .to_lowercase();
            let parsed = ParsedResumeInfo::from_text(
                &resume.to_string_lossy(),
                &file_type,
                &resume_text,
            );

            let response = service
                .analyze(&resume_text, &role, &company, jd_text.as_deref(), parsed)
                .await;

            match output_format {
                OutputFormat::Console => {
                    print!("{}", formatter::format_console(&response, config.output.color_output));
                }
                OutputFormat::Json => {
                    println!("{}", formatter::format_json(&response)?);
                }
            }
        }

        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("AI model: {}", config.ai.model);
                println!("AI endpoint: {}", config.ai.endpoint);
                println!("API key env var: {}", config.ai.api_key_env);
                println!("Call timeout: {}s", config.ai.timeout_secs);
                println!("Server: {}:{}", config.server.host, config.server.port);
                println!(
                    "Environment: {}",
                    if config.is_production() { "production" } else { "development" }
                );
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// Build the injected generative model, if enabled and configured.
fn build_model(config: &Config, no_ai: bool) -> Result<Option<Arc<dyn GenerativeModel>>> {
    if no_ai {
        return Ok(None);
    }

    match config.api_key() {
        Some(api_key) => {
            let client = GeminiClient::new(&config.ai, api_key)?;
            Ok(Some(Arc::new(client)))
        }
        None => {
            info!(
                "no API key in ${}; AI suggestions will use fallback payloads",
                config.ai.api_key_env
            );
            Ok(None)
        }
    }
}
