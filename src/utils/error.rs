use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepsError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

/// Failures while reading dependency data from a registry or fixture file.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("metadata request failed: {url} returned {status}")]
    Status { status: u16, url: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("file read error: {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Fetch,
    Unexpected,
}

impl DepsError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Fetch(_) => ErrorCategory::Fetch,
            Self::Unexpected { .. } => ErrorCategory::Unexpected,
        }
    }

    /// Every failure aborts the run with the same status; only the message differs.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Configuration { message } => format!("Configuration error: {}", message),
            Self::Fetch(FetchError::Status { status, url }) => {
                format!("Fetch error: metadata request failed ({} from {})", status, url)
            }
            Self::Fetch(FetchError::Transport(e)) => {
                if e.is_timeout() {
                    "Fetch error: transport failure (request timed out)".to_string()
                } else {
                    format!("Fetch error: transport failure ({})", e)
                }
            }
            Self::Fetch(FetchError::FileRead { path, source }) => {
                format!("Fetch error: file read error ({}: {})", path.display(), source)
            }
            Self::Unexpected { message } => format!("Unexpected error: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => {
                "Check --repo against --mode: live needs an http(s) URL, fixture needs an existing file"
            }
            Self::Fetch(FetchError::Status { status: 404, .. }) => {
                "Check the package name; the registry does not know it"
            }
            Self::Fetch(FetchError::Status { .. }) => "The registry rejected the request; try again later",
            Self::Fetch(FetchError::Transport(_)) => {
                "Check network connectivity or raise --timeout-secs"
            }
            Self::Fetch(FetchError::FileRead { .. }) => {
                "Make sure the fixture file is readable UTF-8 text"
            }
            Self::Unexpected { .. } => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, DepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let config = DepsError::configuration("repo must be a URL in live mode");
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);
        assert_eq!(
            config.to_string(),
            "Configuration error: repo must be a URL in live mode"
        );

        let status = DepsError::from(FetchError::Status {
            status: 404,
            url: "https://pypi.org/pypi/nope/json".to_string(),
        });
        assert_eq!(status.category(), ErrorCategory::Fetch);
        assert_eq!(status.exit_code(), 1);
        assert!(status.user_friendly_message().contains("metadata request failed"));
        assert!(status.recovery_suggestion().contains("package name"));
    }

    #[test]
    fn test_file_read_message_names_path() {
        let err = DepsError::from(FetchError::FileRead {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        let message = err.user_friendly_message();
        assert!(message.starts_with("Fetch error: file read error"));
        assert!(message.contains("/tmp/missing.txt"));
    }
}
