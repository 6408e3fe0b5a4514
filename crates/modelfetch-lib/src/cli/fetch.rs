use crate::cli::FetchParams;
use crate::error::ModelFetchError;
use crate::fetch::fetch_model_with;
use tracing;

pub async fn run_fetch(params: FetchParams) -> Result<(), ModelFetchError> {
    let FetchParams { app_config } = params;

    tracing::debug!(
        candidates = app_config.candidate_urls.len(),
        output = %app_config.output.path.display(),
        min_size_bytes = app_config.min_size_bytes,
        "Fetching model"
    );

    let outcome = fetch_model_with(&app_config).await?;

    tracing::debug!(
        url = %outcome.url,
        attempts = outcome.attempts.len(),
        "Model fetched"
    );
    Ok(())
}
