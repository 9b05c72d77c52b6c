//! Configuration-file loading.
//!
//! A configuration file is a TOML document with one table per named profile:
//!
//! ```toml
//! [default]
//! cloud_apikey = "xxxx-xxxx"
//! zone = "Default"
//!
//! [staging]
//! tpp_url = "https://tpp.example.com"
//! tpp_user = "admin"
//! tpp_password = "secret"
//! zone = "staging\\web"
//! ```
//!
//! The connector type is derived from which keys a profile carries rather
//! than spelled out: `test_mode` selects the fake endpoint, any `tpp_*` key
//! selects TPP, `cloud_apikey`/`cloud_url` select Cloud.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::credentials::{ConnectorType, Credentials};
use super::error::LoadError;
use super::Config;

/// Profile used when the caller does not name one.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Profile {
    url: Option<String>,
    tpp_url: Option<String>,
    cloud_url: Option<String>,
    tpp_user: Option<String>,
    tpp_password: Option<String>,
    tpp_access_token: Option<String>,
    cloud_apikey: Option<String>,
    zone: Option<String>,
    /// Path to a PEM trust bundle, read into the configuration at load time.
    trust_bundle: Option<String>,
    test_mode: Option<bool>,
}

/// Load the named profile from `path` into a full [`Config`].
///
/// An absent `profile` selects [`DEFAULT_PROFILE`]. All failures are part of
/// the loader's own taxonomy; callers propagate them verbatim.
pub fn load_config_from_file(path: &Path, profile: Option<&str>) -> Result<Config, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let profiles: HashMap<String, Profile> =
        toml::from_str(&raw).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let name = profile.unwrap_or(DEFAULT_PROFILE);
    let section = profiles.get(name).ok_or_else(|| LoadError::UnknownProfile {
        name: name.to_string(),
    })?;
    debug!("Loaded profile '{}' from {}", name, path.display());

    build_config(path, section)
}

fn build_config(path: &Path, profile: &Profile) -> Result<Config, LoadError> {
    let connector = derive_connector(path, profile)?;

    let (base_url, credentials) = match connector {
        ConnectorType::Fake => (non_empty(&profile.url), Credentials::None),
        ConnectorType::Tpp => {
            let base_url = non_empty(&profile.tpp_url).or_else(|| non_empty(&profile.url));
            let credentials = match non_empty(&profile.tpp_access_token) {
                Some(token) => Credentials::AccessToken(token),
                None => Credentials::UsernamePassword {
                    user: profile.tpp_user.clone().unwrap_or_default(),
                    password: profile.tpp_password.clone().unwrap_or_default(),
                },
            };
            (base_url, credentials)
        }
        ConnectorType::Cloud => {
            let base_url = non_empty(&profile.cloud_url).or_else(|| non_empty(&profile.url));
            let credentials = Credentials::ApiKey(profile.cloud_apikey.clone().unwrap_or_default());
            (base_url, credentials)
        }
    };

    let trust_bundle = match non_empty(&profile.trust_bundle) {
        Some(bundle_path) => {
            let contents =
                fs::read_to_string(&bundle_path).map_err(|source| LoadError::TrustBundleRead {
                    path: bundle_path.into(),
                    source,
                })?;
            Some(contents)
        }
        None => None,
    };

    Ok(Config {
        connector,
        credentials,
        base_url,
        trust_bundle,
        zone: non_empty(&profile.zone),
        verbose: false,
    })
}

fn derive_connector(path: &Path, profile: &Profile) -> Result<ConnectorType, LoadError> {
    if profile.test_mode.unwrap_or(false) {
        Ok(ConnectorType::Fake)
    } else if profile.tpp_url.is_some()
        || profile.tpp_user.is_some()
        || profile.tpp_password.is_some()
        || profile.tpp_access_token.is_some()
    {
        Ok(ConnectorType::Tpp)
    } else if profile.cloud_apikey.is_some() || profile.cloud_url.is_some() {
        Ok(ConnectorType::Cloud)
    } else {
        Err(LoadError::UnknownConnector {
            path: path.to_path_buf(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
