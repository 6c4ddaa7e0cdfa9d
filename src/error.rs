//! Error type for the fallible edges of the game
//!
//! The simulation itself never fails; only startup work (settings, assets,
//! audio device) can.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while starting the game
#[derive(Debug)]
pub enum Error {
    /// Settings file could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// Settings file is not valid JSON for `Settings`
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Settings parsed but describe an unplayable match
    Config { path: PathBuf, reason: String },
    /// Texture, font, sound or music failed to load
    Asset { path: PathBuf, reason: String },
    /// Audio device could not be opened
    Audio(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a loader failure from the window/audio backend
    pub fn asset(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Error::Asset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "settings I/O error at {}: {}", path.display(), source)
            }
            Error::Parse { path, source } => {
                write!(f, "invalid settings in {}: {}", path.display(), source)
            }
            Error::Config { path, reason } => {
                write!(f, "invalid match rules in {}: {}", path.display(), reason)
            }
            Error::Asset { path, reason } => {
                write!(f, "failed to load asset {}: {}", path.display(), reason)
            }
            Error::Audio(reason) => write!(f, "audio device error: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
            Error::Config { .. } | Error::Asset { .. } | Error::Audio(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_asset_error_message() {
        let err = Error::asset("assets/ballsmall.png", "file not found");
        assert_eq!(
            err.to_string(),
            "failed to load asset assets/ballsmall.png: file not found"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = Error::Io {
            path: PathBuf::from("pongiverse.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("pongiverse.json"));
        assert!(err.source().is_some());
    }
}
