use crate::domain::model::{FixtureRecord, Lookup, PackageName};
use crate::domain::ports::DependencySource;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Flat-file source: one `Name: dep, dep` record per line.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// First record whose name matches exactly wins; later duplicates are ignored.
pub fn find_record(content: &str, package: &PackageName) -> Lookup {
    content
        .lines()
        .filter_map(FixtureRecord::parse)
        .find(|record| record.name == package.as_str())
        .map(|record| Lookup::Found(record.dependency_names()))
        .unwrap_or(Lookup::Unknown)
}

#[async_trait]
impl DependencySource for FixtureSource {
    async fn lookup(&self, package: &PackageName) -> Result<Lookup> {
        tracing::debug!("Reading fixture file: {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::FileRead {
                path: self.path.clone(),
                source,
            })?;

        Ok(find_record(&content, package))
    }
}
