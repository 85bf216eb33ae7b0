//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use std::path::PathBuf;
use thiserror::Error;

/// Fetcher error type
#[derive(Debug, Error)]
pub enum FetchError {
    /// Destination directory cannot be created or used
    #[error("Cannot use destination {}: {source}", path.display())]
    Filesystem {
        /// The offending filesystem path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The hub client failed (network, auth, unknown repository, disk full)
    #[error("Download failed for {repo}: {message}")]
    Download {
        /// Repository identifier that was being fetched
        repo: String,
        /// Message surfaced by the hub client, verbatim
        message: String,
    },
}

impl FetchError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Wraps a hub client error with the repository it occurred on.
    pub fn download(repo: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Download {
            repo: repo.into(),
            message: source.to_string(),
        }
    }
}

/// Result type alias (Fetcher)
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_filesystem_error_display() {
        let error = FetchError::filesystem(
            "/tmp/models",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            error.to_string(),
            "Cannot use destination /tmp/models: permission denied"
        );
    }

    #[test]
    fn test_filesystem_error_source() {
        let error = FetchError::filesystem(
            "/tmp/models",
            io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_download_error_display() {
        let error = FetchError::download("org/tiny-model", "request error: status 404");
        assert_eq!(
            error.to_string(),
            "Download failed for org/tiny-model: request error: status 404"
        );
    }
}
