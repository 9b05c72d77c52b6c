//! Integration tests for the TOML configuration-file loader.

use std::io::Write;
use std::path::Path;

use certops::config::{ConnectorType, Credentials, LoadError, load_config_from_file};
use tempfile::NamedTempFile;

fn temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file() {
    let err = load_config_from_file(Path::new("/nonexistent/certops.toml"), None).unwrap_err();
    assert!(matches!(err, LoadError::Missing { .. }));
}

#[test]
fn test_malformed_toml() {
    let file = temp_config("this is not toml [");
    let err = load_config_from_file(file.path(), None).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let file = temp_config("[default]\ncloud_apikey = \"key\"\nbogus = true\n");
    let err = load_config_from_file(file.path(), None).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn test_default_profile_used_when_none_requested() {
    let file = temp_config(
        "[default]\ncloud_apikey = \"key\"\nzone = \"Default\"\n\n[staging]\ncloud_apikey = \"other\"\n",
    );
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(config.credentials, Credentials::ApiKey("key".into()));
    assert_eq!(config.zone.as_deref(), Some("Default"));
}

#[test]
fn test_named_profile_selected() {
    let file = temp_config(
        "[default]\ncloud_apikey = \"key\"\n\n[staging]\ncloud_apikey = \"other\"\nzone = \"staging\"\n",
    );
    let config = load_config_from_file(file.path(), Some("staging")).unwrap();
    assert_eq!(config.credentials, Credentials::ApiKey("other".into()));
    assert_eq!(config.zone.as_deref(), Some("staging"));
}

#[test]
fn test_unknown_profile() {
    let file = temp_config("[default]\ncloud_apikey = \"key\"\n");
    let err = load_config_from_file(file.path(), Some("prod")).unwrap_err();
    assert!(matches!(err, LoadError::UnknownProfile { name } if name == "prod"));
}

#[test]
fn test_tpp_profile_with_access_token() {
    let file = temp_config(
        "[default]\ntpp_url = \"https://tpp.example.com\"\ntpp_access_token = \"tok\"\nzone = \"ops\"\n",
    );
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(config.connector, ConnectorType::Tpp);
    assert_eq!(config.credentials, Credentials::AccessToken("tok".into()));
    assert_eq!(config.base_url.as_deref(), Some("https://tpp.example.com"));
}

#[test]
fn test_tpp_profile_with_username_and_password() {
    let file = temp_config(
        "[default]\ntpp_url = \"https://tpp.example.com\"\ntpp_user = \"admin\"\ntpp_password = \"secret\"\n",
    );
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(
        config.credentials,
        Credentials::UsernamePassword {
            user: "admin".into(),
            password: "secret".into(),
        }
    );
}

#[test]
fn test_cloud_profile() {
    let file = temp_config("[default]\ncloud_url = \"https://api.example.com\"\ncloud_apikey = \"key\"\n");
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(config.connector, ConnectorType::Cloud);
    assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
}

#[test]
fn test_fake_profile() {
    let file = temp_config("[default]\ntest_mode = true\n");
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(config.connector, ConnectorType::Fake);
    assert_eq!(config.credentials, Credentials::None);
}

#[test]
fn test_profile_without_connector_keys() {
    let file = temp_config("[default]\nzone = \"ops\"\n");
    let err = load_config_from_file(file.path(), None).unwrap_err();
    assert!(matches!(err, LoadError::UnknownConnector { .. }));
}

#[test]
fn test_trust_bundle_path_is_read_into_contents() {
    let bundle = temp_config("-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n");
    let file = temp_config(&format!(
        "[default]\ncloud_apikey = \"key\"\ntrust_bundle = \"{}\"\n",
        bundle.path().display()
    ));
    let config = load_config_from_file(file.path(), None).unwrap();
    assert_eq!(
        config.trust_bundle.as_deref(),
        Some("-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n")
    );
}

#[test]
fn test_missing_trust_bundle_path() {
    let file = temp_config(
        "[default]\ncloud_apikey = \"key\"\ntrust_bundle = \"/nonexistent/bundle.pem\"\n",
    );
    let err = load_config_from_file(file.path(), None).unwrap_err();
    assert!(matches!(err, LoadError::TrustBundleRead { .. }));
}

#[test]
fn test_loaded_config_is_not_verbose() {
    let file = temp_config("[default]\ncloud_apikey = \"key\"\n");
    let config = load_config_from_file(file.path(), None).unwrap();
    assert!(!config.verbose);
}
