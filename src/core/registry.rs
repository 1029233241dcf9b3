use crate::core::specifier::extract_names;
use crate::domain::model::{Lookup, PackageName};
use crate::domain::ports::DependencySource;
use crate::utils::error::{DepsError, FetchError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Default, Deserialize)]
struct ProjectMetadata {
    #[serde(default)]
    info: Option<ProjectInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectInfo {
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

/// Reads `requires_dist` from a PyPI-compatible JSON API.
pub struct RegistrySource {
    base: Url,
    client: Client,
}

impl RegistrySource {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("direct-deps/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { base, client })
    }

    /// `{base}/pypi/{package}/json`, tolerating a trailing slash on the base.
    pub fn metadata_url(&self, package: &PackageName) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DepsError::configuration("repo must be a URL in live mode"))?
            .pop_if_empty()
            .extend(["pypi", package.as_str(), "json"]);
        Ok(url)
    }
}

/// Specifier strings from a metadata body; absent or `null` fields mean none.
fn requires_dist(body: &str) -> Result<Vec<String>> {
    let metadata: ProjectMetadata = serde_json::from_str(body)
        .map_err(|e| DepsError::unexpected(format!("invalid registry metadata: {}", e)))?;
    Ok(metadata
        .info
        .and_then(|info| info.requires_dist)
        .unwrap_or_default())
}

#[async_trait]
impl DependencySource for RegistrySource {
    async fn lookup(&self, package: &PackageName) -> Result<Lookup> {
        let url = self.metadata_url(package)?;

        tracing::debug!("Making registry request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        tracing::debug!("Registry response status: {}", status);

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        let specifiers = requires_dist(&body)?;
        tracing::debug!("{} declares {} specifiers", package, specifiers.len());

        Ok(Lookup::Found(extract_names(
            specifiers.iter().map(String::as_str),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source(base: &str) -> RegistrySource {
        RegistrySource::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_metadata_url_joins_segments() {
        let name = PackageName::new("requests").unwrap();
        assert_eq!(
            source("https://pypi.org").metadata_url(&name).unwrap().as_str(),
            "https://pypi.org/pypi/requests/json"
        );
        assert_eq!(
            source("https://mirror.example/simple/").metadata_url(&name).unwrap().as_str(),
            "https://mirror.example/simple/pypi/requests/json"
        );
    }

    #[test]
    fn test_metadata_url_encodes_package_segment() {
        let name = PackageName::new("odd/name").unwrap();
        assert_eq!(
            source("https://pypi.org").metadata_url(&name).unwrap().as_str(),
            "https://pypi.org/pypi/odd%2Fname/json"
        );
    }

    #[test]
    fn test_requires_dist_missing_or_null() {
        assert!(requires_dist("{}").unwrap().is_empty());
        assert!(requires_dist(r#"{"info": {}}"#).unwrap().is_empty());
        assert!(requires_dist(r#"{"info": {"requires_dist": null}}"#).unwrap().is_empty());
        assert!(requires_dist(r#"{"info": null}"#).unwrap().is_empty());
        assert!(requires_dist("<html>").is_err());
    }

    #[tokio::test]
    async fn test_lookup_extracts_names_in_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/pypi/requests/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "info": {
                        "name": "requests",
                        "requires_dist": [
                            "charset_normalizer<4,>=2",
                            "idna<4,>=2.5",
                            "PySocks!=1.5.7,>=1.5.6; extra == \"socks\""
                        ]
                    }
                }));
        });

        let source = source(&server.base_url());
        let lookup = source
            .lookup(&PackageName::new("requests").unwrap())
            .await
            .unwrap();

        mock.assert();
        let names: Vec<String> = lookup.into_dependencies().into_iter().map(String::from).collect();
        assert_eq!(names, vec!["charset_normalizer", "idna", "PySocks"]);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_status_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pypi/ghost/json");
            then.status(404);
        });

        let err = source(&server.base_url())
            .lookup(&PackageName::new("ghost").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DepsError::Fetch(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pypi/weird/json");
            then.status(204);
        });

        let err = source(&server.base_url())
            .lookup(&PackageName::new("weird").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DepsError::Fetch(FetchError::Status { status: 204, .. })
        ));
    }
}
