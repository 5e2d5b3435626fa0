mod cli;
mod commands;
mod config;
mod display;
mod error;
mod fetch;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("ligview CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let partial = PartialAppConfig::load(cli.config.as_deref())?;

    let command_result = match cli.command {
        Commands::Inspect(args) => {
            info!("Dispatching to 'inspect' command.");
            let config = partial.merge_with_cli(
                &args.report.set_values,
                CliOverrides {
                    report: Some(&args.report),
                    ..Default::default()
                },
            )?;
            commands::inspect::run(args, &config).await
        }
        Commands::Fetch(args) => {
            info!("Dispatching to 'fetch' command.");
            let config = partial.merge_with_cli(
                &args.report.set_values,
                CliOverrides {
                    url_template: args.url_template.as_deref(),
                    timeout_seconds: args.timeout,
                    report: Some(&args.report),
                },
            )?;
            commands::fetch::run(args, &config).await
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
