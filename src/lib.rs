pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{ConfigLayer, ResolvedConfig};
pub use core::fetcher::{fetch_direct_dependencies, DependencyFetcher};
pub use domain::model::{Mode, PackageName, RepoLocation};
pub use utils::error::{DepsError, FetchError, Result};
