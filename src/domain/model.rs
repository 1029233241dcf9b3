use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_file, validate_url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// A package identifier, trimmed of surrounding whitespace and never empty.
/// Equality is byte-for-byte; no case folding or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PackageName {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| "package name must not be empty".to_string())
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Query a live registry over HTTP
    #[default]
    #[serde(alias = "real")]
    #[cfg_attr(feature = "cli", value(alias = "real"))]
    Live,
    /// Read a local `Name: dep, dep` fixture file
    #[serde(alias = "test")]
    #[cfg_attr(feature = "cli", value(alias = "test"))]
    Fixture,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => f.write_str("live"),
            Mode::Fixture => f.write_str("fixture"),
        }
    }
}

/// Where dependency data comes from. Only constructible through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLocation {
    Registry(Url),
    Fixture(PathBuf),
}

impl RepoLocation {
    pub fn new(raw: &str, mode: Mode) -> Result<Self> {
        match mode {
            Mode::Live => Ok(Self::Registry(validate_url(raw)?)),
            Mode::Fixture => {
                validate_existing_file(raw)?;
                Ok(Self::Fixture(PathBuf::from(raw)))
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Registry(_) => Mode::Live,
            Self::Fixture(_) => Mode::Fixture,
        }
    }
}

impl fmt::Display for RepoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(url) => write!(f, "{}", url),
            Self::Fixture(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One `Name:dep, dep` line of a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord<'a> {
    pub name: &'a str,
    pub dependencies: &'a str,
}

impl<'a> FixtureRecord<'a> {
    /// Splits at the first `:`; lines without one are not records.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (name, dependencies) = line.split_once(':')?;
        Some(Self { name, dependencies })
    }

    /// Comma-separated tokens, trimmed, empties dropped, in file order.
    pub fn dependency_names(&self) -> Vec<PackageName> {
        self.dependencies
            .split(',')
            .filter_map(PackageName::new)
            .collect()
    }
}

/// Result of asking a source about a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<PackageName>),
    Unknown,
}

impl Lookup {
    pub fn into_dependencies(self) -> Vec<PackageName> {
        match self {
            Lookup::Found(deps) => deps,
            Lookup::Unknown => Vec::new(),
        }
    }
}
