use crate::config::ConfigLayer;
use crate::domain::model::Mode;
use crate::utils::error::{DepsError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g.
///
/// ```toml
/// [source]
/// repo = "${PYPI_MIRROR}"
/// mode = "live"
/// timeout_secs = 10
///
/// [report]
/// filter = "test"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub repo: Option<String>,
    pub mode: Option<Mode>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub output: Option<String>,
    pub ascii: Option<bool>,
    pub filter: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            DepsError::configuration(format!(
                "cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| DepsError::configuration(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| DepsError::unexpected(format!("env pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            package: None,
            repo: self.source.repo.clone(),
            mode: self.source.mode,
            output: self.report.output.clone(),
            ascii: self.report.ascii,
            filter: self.report.filter.clone(),
            timeout_secs: self.source.timeout_secs,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.source.timeout_secs {
            validate_positive_number("source.timeout_secs", timeout, 1)?;
        }
        if let Some(repo) = &self.source.repo {
            if repo.contains("${") {
                return Err(DepsError::configuration(format!(
                    "source.repo has an unresolved variable: {}",
                    repo
                )));
            }
        }
        Ok(())
    }
}
