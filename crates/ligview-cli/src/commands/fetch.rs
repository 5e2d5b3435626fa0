use super::present;
use crate::cli::FetchArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::fetch::LigandFetcher;
use crate::utils::parser::LigandId;
use crate::utils::progress::DownloadProgress;
use ligview::core::io::pdb::decode_text;
use ligview::workflows::session::LigandSession;
use std::io::{IsTerminal, Write};
use tokio::task;
use tracing::info;

pub async fn run(args: FetchArgs, config: &AppConfig) -> Result<()> {
    let progress = DownloadProgress::new(!std::io::stderr().is_terminal());
    let session = load(args, config, &progress).await?;
    let mut stdout = std::io::stdout().lock();
    show(&session, config, &mut stdout)
}

/// Downloads the ligand, optionally saves the raw file, and parses it into a fresh session.
async fn load(
    args: FetchArgs,
    config: &AppConfig,
    progress: &DownloadProgress,
) -> Result<LigandSession> {
    let id: LigandId = args
        .ligand_id
        .parse()
        .map_err(|e: crate::utils::parser::ParseError| CliError::Argument(e.to_string()))?;

    let fetcher = LigandFetcher::new(&config.fetch)?;
    let downloaded = fetcher.fetch(&id, |p| progress.update(p)).await;
    progress.finish(downloaded.is_ok());
    let bytes = downloaded?;

    let output = args.output;
    task::spawn_blocking(move || {
        let text = decode_text(bytes)?;
        if let Some(path) = &output {
            info!("Saving downloaded file to {:?}", path);
            std::fs::write(path, &text)?;
        }
        let mut session = LigandSession::new();
        session.load(id.as_str(), &text);
        Ok::<_, CliError>(session)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Parsing task panicked: {}", e)))?
}

fn show(session: &LigandSession, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let title = session.ligand_id().unwrap_or_default();
    present(
        out,
        title,
        session.molecule(),
        session.report(),
        &config.report,
    )
}
