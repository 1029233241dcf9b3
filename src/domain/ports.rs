use crate::domain::model::{Lookup, PackageName};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A place that can answer "what does this package depend on, one level down".
#[async_trait]
pub trait DependencySource: Send + Sync {
    async fn lookup(&self, package: &PackageName) -> Result<Lookup>;
}
