//! Configuration resolution for certops commands.
//!
//! Merges an optional configuration file with command-line flag overrides
//! into the single [`Config`] value handed to a connector. The connectors
//! themselves (cloud service, TPP appliance, fake test endpoint) live in the
//! issuance library; this module only decides which one to target and with
//! what settings.

mod credentials;
mod error;
mod file;
mod notice;
mod resolver;

pub use credentials::{ConnectorType, Credentials};
pub use error::{ConfigError, FatalError, LoadError};
pub use file::{DEFAULT_PROFILE, load_config_from_file};
pub use notice::{LogNoticeSink, Notice, NoticeSink};
pub use resolver::{resolve, resolve_with_sink};

/// Which CLI operation a configuration is being resolved for.
///
/// Only `Enroll`/`Pickup` (zone validation) and `Getcred` (refresh- vs
/// access-token routing) change the resolver's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Enroll,
    Pickup,
    Getcred,
    Revoke,
    Renew,
}

/// Read-only record of the CLI options that feed configuration resolution.
///
/// Optional strings left as `None` or set to an empty string both count as
/// "not supplied"; the flag-parsing layer may pass empty values through.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    pub config_file: Option<String>,
    pub profile: Option<String>,
    pub verbose: bool,
    pub test_mode: bool,
    /// Upper bound in whole seconds for the emulated endpoint delay; 0 disables it.
    pub test_mode_delay: u64,
    pub tpp_user: Option<String>,
    pub tpp_token: Option<String>,
    pub tpp_password: Option<String>,
    pub client_p12: Option<String>,
    pub url: Option<String>,
    pub tpp_url: Option<String>,
    pub cloud_url: Option<String>,
    pub api_key: Option<String>,
    pub trust_bundle: Option<String>,
    pub zone: Option<String>,
    pub pickup_id: Option<String>,
    pub pickup_id_file: Option<String>,
}

/// The resolved connection configuration.
///
/// `trust_bundle` holds PEM contents, not a path; by the time resolution
/// succeeds the file has already been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub connector: ConnectorType,
    pub credentials: Credentials,
    pub base_url: Option<String>,
    pub trust_bundle: Option<String>,
    pub zone: Option<String>,
    pub verbose: bool,
}
