use crate::config::{FetchConfig, ID_PLACEHOLDER};
use crate::error::Result;
use crate::utils::parser::LigandId;
use futures_util::StreamExt;
use tracing::{debug, info};

const MAX_PREALLOCATION: u64 = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchProgress {
    Connecting { url: String },
    DownloadStarted { total_size: Option<u64> },
    Downloading { downloaded: u64 },
}

/// Downloads ligand model files from a templated URL.
#[derive(Debug)]
pub struct LigandFetcher {
    client: reqwest::Client,
    url_template: String,
}

impl LigandFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ligview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    pub fn url_for(&self, id: &LigandId) -> String {
        self.url_template.replace(ID_PLACEHOLDER, id.as_str())
    }

    /// Returns the raw response body. Non-success statuses are errors.
    pub async fn fetch(
        &self,
        id: &LigandId,
        mut progress_callback: impl FnMut(FetchProgress),
    ) -> Result<Vec<u8>> {
        let url = self.url_for(id);
        info!("Requesting ligand '{}' from {}", id, url);
        progress_callback(FetchProgress::Connecting { url: url.clone() });

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let total_size = response.content_length();
        progress_callback(FetchProgress::DownloadStarted { total_size });

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::with_capacity(initial_capacity(total_size));

        while let Some(item) = stream.next().await {
            let chunk = item?;
            buffer.extend_from_slice(&chunk);
            downloaded += chunk.len() as u64;
            progress_callback(FetchProgress::Downloading { downloaded });
        }

        debug!("Received {} bytes for ligand '{}'.", downloaded, id);
        Ok(buffer)
    }
}

/// Buffer size to reserve up front; the advertised length is only a hint.
fn initial_capacity(total_size: Option<u64>) -> usize {
    total_size.unwrap_or(0).min(MAX_PREALLOCATION) as usize
}
