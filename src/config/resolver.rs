//! The flag-to-configuration resolution pipeline.
//!
//! Resolution runs in one synchronous pass: pick the source (file or flags),
//! derive the connector and credentials, apply the trust-bundle and zone
//! overrides, then validate the result for the requested command. The only
//! suspension point is the optional test-mode delay, a deliberate blocking
//! sleep that callers wanting cancellation must wrap in an abortable task.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::info;
use rand::Rng;

use super::credentials::{ConnectorType, Credentials};
use super::error::{ConfigError, FatalError};
use super::file::load_config_from_file;
use super::notice::{LogNoticeSink, Notice, NoticeSink};
use super::{CommandKind, Config, FlagSet};

/// One connector-selection rule: the first predicate that matches decides.
type ConnectorRule = (fn(&FlagSet) -> bool, ConnectorType);

/// Ordered connector-selection rules, evaluated top to bottom; [`ConnectorType::Cloud`]
/// is the fallback when none match.
const CONNECTOR_RULES: &[ConnectorRule] = &[
    (|flags: &FlagSet| flags.test_mode, ConnectorType::Fake),
    (
        |flags: &FlagSet| {
            is_set(&flags.tpp_user) || is_set(&flags.tpp_token) || is_set(&flags.client_p12)
        },
        ConnectorType::Tpp,
    ),
];

/// Resolve the configuration for `command`, logging override notices.
pub fn resolve(command: CommandKind, flags: &FlagSet) -> Result<Config, ConfigError> {
    resolve_with_sink(command, flags, &mut LogNoticeSink)
}

/// Resolve the configuration for `command`, sending override notices to `sink`.
pub fn resolve_with_sink(
    command: CommandKind,
    flags: &FlagSet,
    sink: &mut dyn NoticeSink,
) -> Result<Config, ConfigError> {
    let mut config = match value_of(&flags.config_file) {
        Some(path) => load_config_from_file(Path::new(&path), value_of(&flags.profile).as_deref())?,
        None => from_flags(command, flags)?,
    };

    // Verbosity always comes from the command line, even when a file was loaded.
    config.verbose = flags.verbose;

    apply_trust_bundle(&mut config, flags, sink)?;
    apply_zone(&mut config, flags, sink);
    validate(command, flags, &config)?;

    Ok(config)
}

/// Derive connector, credentials, and base URL from flags alone.
fn from_flags(command: CommandKind, flags: &FlagSet) -> Result<Config, ConfigError> {
    let connector = select_connector(flags);

    let (base_url, credentials) = match connector {
        ConnectorType::Fake => {
            emulate_endpoint_delay(flags.test_mode_delay);
            (None, Credentials::None)
        }
        ConnectorType::Tpp => {
            let base_url = value_of(&flags.url).or_else(|| value_of(&flags.tpp_url));
            if !is_set(&flags.tpp_token)
                && !is_set(&flags.tpp_password)
                && !is_set(&flags.client_p12)
            {
                return Err(FatalError::MissingTppCredentials.into());
            }
            let credentials = match value_of(&flags.tpp_token) {
                // A token passed to getcred is the refresh token being traded
                // in; for every other command it is the access token itself.
                Some(token) if command == CommandKind::Getcred => {
                    Credentials::RefreshToken(token)
                }
                Some(token) => Credentials::AccessToken(token),
                None => Credentials::UsernamePassword {
                    user: flags.tpp_user.clone().unwrap_or_default(),
                    password: flags.tpp_password.clone().unwrap_or_default(),
                },
            };
            (base_url, credentials)
        }
        ConnectorType::Cloud => {
            let base_url = value_of(&flags.cloud_url).or_else(|| value_of(&flags.url));
            let credentials = Credentials::ApiKey(flags.api_key.clone().unwrap_or_default());
            (base_url, credentials)
        }
    };

    Ok(Config {
        connector,
        credentials,
        base_url,
        trust_bundle: None,
        zone: None,
        verbose: flags.verbose,
    })
}

fn select_connector(flags: &FlagSet) -> ConnectorType {
    CONNECTOR_RULES
        .iter()
        .find(|(applies, _)| applies(flags))
        .map_or(ConnectorType::Cloud, |&(_, connector)| connector)
}

/// Block for a uniformly random whole-seconds duration in `[0, bound)`.
fn emulate_endpoint_delay(bound: u64) {
    if bound == 0 {
        return;
    }
    info!("Running in test mode with an emulated endpoint delay.");
    let delay = rand::thread_rng().gen_range(0..bound);
    thread::sleep(Duration::from_secs(delay));
}

fn apply_trust_bundle(
    config: &mut Config,
    flags: &FlagSet,
    sink: &mut dyn NoticeSink,
) -> Result<(), ConfigError> {
    let Some(path) = value_of(&flags.trust_bundle) else {
        return Ok(());
    };
    info!("Detected trust bundle flag at CLI.");
    if config.trust_bundle.is_some() {
        sink.notify(Notice::TrustBundleOverride);
    }
    let contents = fs::read_to_string(&path).map_err(|source| FatalError::TrustBundleRead {
        path: PathBuf::from(&path),
        source,
    })?;
    config.trust_bundle = Some(contents);
    Ok(())
}

fn apply_zone(config: &mut Config, flags: &FlagSet, sink: &mut dyn NoticeSink) {
    if let Some(zone) = value_of(&flags.zone) {
        if config.zone.is_some() {
            sink.notify(Notice::ZoneOverride);
        }
        config.zone = Some(zone);
    }
}

/// Enroll and pickup need a zone unless the connector is fake or a pickup id
/// locates the certificate directly.
fn validate(command: CommandKind, flags: &FlagSet, config: &Config) -> Result<(), ConfigError> {
    if !matches!(command, CommandKind::Enroll | CommandKind::Pickup) {
        return Ok(());
    }
    let zone_missing = config.zone.as_deref().is_none_or(str::is_empty);
    let pickup_supplied = is_set(&flags.pickup_id) || is_set(&flags.pickup_id_file);
    if zone_missing && config.connector != ConnectorType::Fake && !pickup_supplied {
        return Err(ConfigError::EmptyZone);
    }
    Ok(())
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn value_of(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
