//! Error taxonomy for configuration resolution.
//!
//! Fatal operator mistakes are ordinary error variants here; only the binary
//! decides to turn [`ConfigError::Fatal`] into immediate process termination.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Any failure of [`resolve`](super::resolve).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Propagated verbatim from the configuration-file loader.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Enroll/pickup requested without a zone, a fake connector, or a pickup id.
    #[error("Zone cannot be empty. Use -z option")]
    EmptyZone,

    /// Unrecoverable operator error; callers should stop before any network activity.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl ConfigError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConfigError::Fatal(_))
    }
}

/// Failures owned by the configuration-file loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("configuration file not found: {path:?}")]
    Missing { path: PathBuf },

    #[error("failed to read configuration file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("profile '{name}' not found in configuration file")]
    UnknownProfile { name: String },

    #[error("unable to determine connector type from configuration file {path:?}")]
    UnknownConnector { path: PathBuf },

    #[error("failed to read trust bundle {path:?}")]
    TrustBundleRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Misconfigurations that should stop the client before it touches the network.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("a password is required to communicate with TPP")]
    MissingTppCredentials,

    #[error("failed to read trust bundle {path:?}")]
    TrustBundleRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
