use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("invalid {flag}: {message}")]
    InvalidOption {
        flag: &'static str,
        message: String,
    },
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PreloadError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_option(flag: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            flag,
            message: message.into(),
        }
    }

    /// A directory that cannot be listed counts as absent, whatever the cause.
    pub fn not_listable(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Maps a filesystem error, turning `NotFound` into its own variant.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PreloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = PreloadError::from_io(
            Path::new("dist/demo/index.html"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, PreloadError::NotFound { .. }));
        assert_eq!(err.to_string(), "not found: dist/demo/index.html");
    }

    #[test]
    fn option_errors_name_the_flag() {
        let err = PreloadError::invalid_option("--marker", "must not be empty");
        assert_eq!(err.to_string(), "invalid --marker: must not be empty");
    }

    #[test]
    fn other_failures_stay_io() {
        let err = PreloadError::from_io(
            Path::new("dist/demo/index.html"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, PreloadError::Io { .. }));
        assert!(err.to_string().starts_with("i/o error on dist/demo/index.html"));
    }
}
