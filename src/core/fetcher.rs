use crate::core::fixture::FixtureSource;
use crate::core::registry::RegistrySource;
use crate::domain::model::{Lookup, Mode, PackageName, RepoLocation};
use crate::domain::ports::DependencySource;
use crate::utils::error::{DepsError, Result};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves the direct dependencies of one package against one source.
pub struct DependencyFetcher {
    source: Box<dyn DependencySource>,
}

impl DependencyFetcher {
    pub fn new(source: Box<dyn DependencySource>) -> Self {
        Self { source }
    }

    pub fn for_location(repo: &RepoLocation, timeout: Duration) -> Result<Self> {
        let source: Box<dyn DependencySource> = match repo {
            RepoLocation::Registry(url) => Box::new(RegistrySource::new(url.clone(), timeout)?),
            RepoLocation::Fixture(path) => Box::new(FixtureSource::new(path.clone())),
        };
        Ok(Self::new(source))
    }

    /// Names exactly as the source yields them, in source order.
    pub async fn fetch(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        let dependencies = match self.source.lookup(package).await? {
            Lookup::Found(deps) => deps,
            Lookup::Unknown => {
                tracing::warn!("Package {} not found in source; reporting no dependencies", package);
                Vec::new()
            }
        };

        tracing::info!("{} has {} direct dependencies", package, dependencies.len());
        Ok(dependencies)
    }
}

/// One-shot entry point: validate `repo` for `mode`, then fetch with the default timeout.
pub async fn fetch_direct_dependencies(
    package: &str,
    repo: &str,
    mode: Mode,
) -> Result<Vec<PackageName>> {
    let package = PackageName::new(package)
        .ok_or_else(|| DepsError::configuration("package must not be empty"))?;
    let repo = RepoLocation::new(repo, mode)?;
    DependencyFetcher::for_location(&repo, DEFAULT_TIMEOUT)?
        .fetch(&package)
        .await
}
