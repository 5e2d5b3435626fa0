mod defaults;

use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub use defaults::{DEFAULT_URL_TEMPLATE, DefaultsConfig};

pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url_template: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub list_atoms: bool,
    pub list_bonds: bool,
    pub show_diagnostics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
}

/// Command-line values that take precedence over the file and `--set` values.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub url_template: Option<&'a str>,
    pub timeout_seconds: Option<u64>,
    pub report: Option<&'a ReportArgs>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialFetchConfig {
    #[serde(rename = "url-template")]
    url_template: Option<String>,
    #[serde(rename = "timeout-seconds")]
    timeout_seconds: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialReportConfig {
    #[serde(rename = "list-atoms")]
    list_atoms: Option<bool>,
    #[serde(rename = "list-bonds")]
    list_bonds: Option<bool>,
    #[serde(rename = "show-diagnostics")]
    show_diagnostics: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    fetch: Option<PartialFetchConfig>,
    report: Option<PartialReportConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the explicit path if one was given, otherwise the per-user file when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using built-in defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli(
        mut self,
        set_values: &[String],
        overrides: CliOverrides<'_>,
    ) -> Result<AppConfig> {
        self.apply_set_values(set_values)?;

        let defaults = DefaultsConfig::default();
        let fetch = self.fetch.take().unwrap_or_default();
        let report = self.report.take().unwrap_or_default();

        let url_template = overrides
            .url_template
            .map(str::to_string)
            .or(fetch.url_template)
            .unwrap_or(defaults.url_template);
        if !url_template.contains(ID_PLACEHOLDER) {
            return Err(CliError::Config(format!(
                "`fetch.url-template` must contain the '{}' placeholder: {}",
                ID_PLACEHOLDER, url_template
            )));
        }

        let timeout_seconds = overrides
            .timeout_seconds
            .or(fetch.timeout_seconds)
            .unwrap_or(defaults.timeout_seconds);
        if timeout_seconds == 0 {
            return Err(CliError::Config(
                "`fetch.timeout-seconds` must be greater than zero.".to_string(),
            ));
        }

        let flags = overrides.report;
        let list_atoms = flags.is_some_and(|f| f.atoms)
            || report.list_atoms.unwrap_or(defaults.list_atoms);
        let list_bonds = flags.is_some_and(|f| f.bonds)
            || report.list_bonds.unwrap_or(defaults.list_bonds);
        let show_diagnostics = !flags.is_some_and(|f| f.no_diagnostics)
            && report.show_diagnostics.unwrap_or(defaults.show_diagnostics);

        Ok(AppConfig {
            fetch: FetchConfig {
                url_template,
                timeout: Duration::from_secs(timeout_seconds),
            },
            report: ReportConfig {
                list_atoms,
                list_bonds,
                show_diagnostics,
            },
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "fetch.url-template" => {
                    self.fetch.get_or_insert_with(Default::default).url_template =
                        Some(value_str.to_string());
                }
                "fetch.timeout-seconds" => {
                    self.fetch.get_or_insert_with(Default::default).timeout_seconds =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "report.list-atoms" => {
                    self.report.get_or_insert_with(Default::default).list_atoms =
                        Some(parse_value(key, value_str, "boolean")?);
                }
                "report.list-bonds" => {
                    self.report.get_or_insert_with(Default::default).list_bonds =
                        Some(parse_value(key, value_str, "boolean")?);
                }
                "report.show-diagnostics" => {
                    self.report
                        .get_or_insert_with(Default::default)
                        .show_diagnostics = Some(parse_value(key, value_str, "boolean")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "ligview", "ligview").map(|dirs| dirs.config_dir().join("config.toml"))
}
