#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::fetcher::DEFAULT_TIMEOUT;
use crate::domain::model::{Mode, PackageName, RepoLocation};
use crate::utils::error::{DepsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_REPO: &str = "https://pypi.org";
pub const DEFAULT_OUTPUT: &str = "graph.svg";

/// One layer of settings (command line, config file). Unset fields fall
/// through to the next layer and finally to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigLayer {
    pub package: Option<String>,
    pub repo: Option<String>,
    pub mode: Option<Mode>,
    pub output: Option<String>,
    pub ascii: Option<bool>,
    pub filter: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigLayer {
    /// Fields set on `self` win over `lower`.
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            package: self.package.or(lower.package),
            repo: self.repo.or(lower.repo),
            mode: self.mode.or(lower.mode),
            output: self.output.or(lower.output),
            ascii: self.ascii.or(lower.ascii),
            filter: self.filter.or(lower.filter),
            timeout_secs: self.timeout_secs.or(lower.timeout_secs),
        }
    }
}

/// Validated settings for one run, built once and passed by value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub package: PackageName,
    pub repo: RepoLocation,
    /// `repo` as the user wrote it, for echoing back.
    pub repo_input: String,
    pub output: String,
    pub ascii: bool,
    pub filter: String,
    pub timeout: Duration,
}

impl ResolvedConfig {
    pub fn mode(&self) -> Mode {
        self.repo.mode()
    }
}

impl TryFrom<ConfigLayer> for ResolvedConfig {
    type Error = DepsError;

    fn try_from(layer: ConfigLayer) -> Result<Self> {
        let package = layer.package.unwrap_or_default();
        validate_non_empty_string("package", &package)?;
        let package = PackageName::new(&package)
            .ok_or_else(|| DepsError::configuration("package must not be empty"))?;

        let timeout = match layer.timeout_secs {
            Some(secs) => {
                validate_positive_number("timeout_secs", secs, 1)?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let mode = layer.mode.unwrap_or_default();
        let repo_input = layer.repo.unwrap_or_else(|| DEFAULT_REPO.to_string());
        let repo = RepoLocation::new(&repo_input, mode)?;

        Ok(Self {
            package,
            repo,
            repo_input,
            output: layer.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            ascii: layer.ascii.unwrap_or(false),
            filter: layer.filter.unwrap_or_default(),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn layer(package: &str) -> ConfigLayer {
        ConfigLayer {
            package: Some(package.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::try_from(layer("requests")).unwrap();
        assert_eq!(config.package.as_str(), "requests");
        assert_eq!(config.mode(), Mode::Live);
        assert_eq!(config.repo.to_string(), "https://pypi.org/");
        assert_eq!(config.repo_input, "https://pypi.org");
        assert_eq!(config.output, "graph.svg");
        assert!(!config.ascii);
        assert_eq!(config.filter, "");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_live_mode_requires_url() {
        let err = ResolvedConfig::try_from(ConfigLayer {
            repo: Some("not-a-url".to_string()),
            ..layer("requests")
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: repo must be a URL in live mode"
        );
    }

    #[test]
    fn test_fixture_mode_requires_file() {
        let err = ResolvedConfig::try_from(ConfigLayer {
            mode: Some(Mode::Fixture),
            ..layer("requests")
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: repo must be an existing file in fixture mode"
        );

        let file = NamedTempFile::new().unwrap();
        let config = ResolvedConfig::try_from(ConfigLayer {
            mode: Some(Mode::Fixture),
            repo: Some(file.path().to_str().unwrap().to_string()),
            ..layer("requests")
        })
        .unwrap();
        assert_eq!(config.mode(), Mode::Fixture);
    }

    #[test]
    fn test_package_and_timeout_rules() {
        assert!(ResolvedConfig::try_from(layer("  ")).is_err());
        assert!(ResolvedConfig::try_from(ConfigLayer::default()).is_err());
        assert!(ResolvedConfig::try_from(ConfigLayer {
            timeout_secs: Some(0),
            ..layer("requests")
        })
        .is_err());
    }

    #[test]
    fn test_layer_precedence() {
        let cli = ConfigLayer {
            package: Some("flask".to_string()),
            filter: Some("test".to_string()),
            ..Default::default()
        };
        let file = ConfigLayer {
            package: Some("django".to_string()),
            repo: Some("https://mirror.example".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        };

        let merged = cli.over(file);
        assert_eq!(merged.package.as_deref(), Some("flask"));
        assert_eq!(merged.repo.as_deref(), Some("https://mirror.example"));
        assert_eq!(merged.filter.as_deref(), Some("test"));
        assert_eq!(merged.timeout_secs, Some(5));
    }
}
