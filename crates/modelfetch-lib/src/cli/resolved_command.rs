use crate::cli::args::Command;
use crate::cli::params::FetchParams;
use crate::config::{Config, load_config};
use crate::error::ModelFetchError;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, ModelFetchError> {
    match command {
        Command::Fetch {
            config_path,
            candidate_urls,
            output_path,
        } => {
            let mut app_config = match config_path {
                Some(config_path) => load_config(&config_path)?,
                None => Config::default(),
            };

            if !candidate_urls.is_empty() {
                app_config.candidate_urls = candidate_urls;
            }
            if let Some(output_path) = output_path {
                app_config.output.path = PathBuf::from(output_path);
            }

            validate_config(&app_config)?;

            Ok(ResolvedCommand::Fetch(FetchParams { app_config }))
        }
    }
}

fn validate_config(app_config: &Config) -> Result<(), ModelFetchError> {
    if app_config.candidate_urls.is_empty() {
        return Err(ModelFetchError::CliArgumentValidation {
            details: "No candidate URLs provided. Configure candidate_urls or pass --url."
                .to_string(),
        });
    }

    for candidate in &app_config.candidate_urls {
        let url = Url::parse(candidate).map_err(|e| ModelFetchError::CliArgumentValidation {
            details: format!("Invalid candidate URL {}: {}", candidate, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ModelFetchError::CliArgumentValidation {
                details: format!(
                    "Unsupported scheme '{}' in candidate URL {}. Only http and https are supported.",
                    url.scheme(),
                    candidate
                ),
            });
        }
    }

    if app_config.output.path.as_os_str().is_empty() {
        return Err(ModelFetchError::CliArgumentValidation {
            details: "Output path must not be empty.".to_string(),
        });
    }

    Ok(())
}
