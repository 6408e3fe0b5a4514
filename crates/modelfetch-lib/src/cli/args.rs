use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        candidate_urls: Vec<String>,
        output_path: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "modelfetch",
    version,
    about = "Download the MobileFaceNet model from the first mirror that serves a real file"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file overriding candidate URLs, output path and minimum size"
    )]
    config: Option<String>,

    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "Overrides candidate URLs, tried in the given order (repeat or use comma-separated values)",
        action = ArgAction::Append,
        value_delimiter = ','
    )]
    urls: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Overrides the destination path of the downloaded model"
    )]
    output: Option<String>,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = Command::Fetch {
        config_path: cli.config,
        candidate_urls: cli.urls,
        output_path: cli.output,
    };

    Args { command, log_level }
}
