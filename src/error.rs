use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatherError {
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read root directory: {}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No file extensions requested; pass --ext or set scan.extensions in a config file")]
    NoExtensions,
}

pub type Result<T> = std::result::Result<T, GatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_a_directory() {
        let err = GatherError::NotADirectory(PathBuf::from("/path/to/file"));
        assert_eq!(err.to_string(), "Path is not a directory: /path/to/file");
    }

    #[test]
    fn test_error_display_root_unreadable() {
        let err = GatherError::RootUnreadable {
            path: PathBuf::from("/locked"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read root directory: /locked");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_display_no_extensions() {
        let err = GatherError::NoExtensions;
        assert!(err.to_string().starts_with("No file extensions requested"));
    }

    #[test]
    fn test_error_from_config_error() {
        let config_err = ConfigError::UnsupportedFormat("cfg.ini".to_string(), "ini".to_string());
        let err: GatherError = config_err.into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unsupported config format for cfg.ini: .ini"
        );
    }
}
