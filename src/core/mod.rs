pub mod fetcher;
pub mod fixture;
pub mod registry;
pub mod report;
pub mod specifier;

pub use crate::domain::model::{Lookup, Mode, PackageName, RepoLocation};
pub use crate::domain::ports::DependencySource;
pub use crate::utils::error::Result;
