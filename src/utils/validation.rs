use crate::utils::error::{DepsError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts only absolute `http://` or `https://` URLs.
pub fn validate_url(url_str: &str) -> Result<Url> {
    let invalid = || DepsError::configuration("repo must be a URL in live mode");

    if !(url_str.starts_with("http://") || url_str.starts_with("https://")) {
        return Err(invalid());
    }

    let url = Url::parse(url_str).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}

pub fn validate_existing_file(path: &str) -> Result<()> {
    let invalid = || DepsError::configuration("repo must be an existing file in fixture mode");

    if path.is_empty() || path.contains('\0') {
        return Err(invalid());
    }

    if Path::new(path).is_file() {
        Ok(())
    } else {
        Err(invalid())
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DepsError::configuration(format!(
            "{} must not be empty",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DepsError::configuration(format!(
            "{} must be at least {}",
            field_name, min_value
        )));
    }
    Ok(())
}
