use super::{ensure_structure, present};
use crate::cli::InspectArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use ligview::PdbFile;
use ligview::core::io::traits::MolecularFile;
use std::io::Write;
use tokio::task;
use tracing::info;

pub async fn run(args: InspectArgs, config: &AppConfig) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    execute(args, config, &mut stdout).await
}

async fn execute(args: InspectArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let title = args.input.display().to_string();
    info!("Reading structure from {}", title);

    let input = args.input.clone();
    let (molecule, report) = task::spawn_blocking(move || {
        PdbFile::read_from_path(&input).map_err(|e| CliError::FileParsing {
            path: input.clone(),
            source: e.into(),
        })
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Parsing task panicked: {}", e)))??;

    ensure_structure(&title, &molecule)?;

    if let Some(output) = &args.output {
        info!("Writing normalized structure to {:?}", output);
        PdbFile::write_to_path(&molecule, output)?;
    }

    present(out, &title, &molecule, &report, &config.report)
}
