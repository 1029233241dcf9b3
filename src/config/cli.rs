use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigLayer, ResolvedConfig};
use crate::domain::model::Mode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "direct-deps")]
#[command(about = "List the direct dependencies of a package from a registry or fixture file")]
pub struct CliArgs {
    /// Package to inspect
    #[arg(long)]
    pub package: String,

    /// Registry root URL (live mode) or fixture file path (fixture mode) [default: https://pypi.org]
    #[arg(long)]
    pub repo: Option<String>,

    /// Data source [default: live]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Output file name for a rendered graph (accepted, not used)
    #[arg(long)]
    pub output: Option<String>,

    /// Render as an ASCII tree (accepted, not used)
    #[arg(long)]
    pub ascii: bool,

    /// Extension: hide printed dependencies whose name contains this substring (the fetched list is unchanged)
    #[arg(long)]
    pub filter: Option<String>,

    /// Registry request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// TOML file supplying defaults for the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            package: Some(self.package.clone()),
            repo: self.repo.clone(),
            mode: self.mode,
            output: self.output.clone(),
            ascii: self.ascii.then_some(true),
            filter: self.filter.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Command line over config file over defaults, then validated.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_layer = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.layer()
            }
            None => ConfigLayer::default(),
        };

        ResolvedConfig::try_from(self.layer().over(file_layer))
    }
}
