use modelfetch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch};
use modelfetch_lib::error::ModelFetchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ModelFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => run_fetch(params).await?,
    }

    Ok(())
}
