use clap::{Args, Parser, Subcommand};

use crate::config::{CommandKind, FlagSet};

#[derive(Parser)]
#[command(name = "certops")]
#[command(about = "A CLI client for requesting and retrieving certificates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a new certificate
    Enroll(ConnectionArgs),
    /// Retrieve a previously requested certificate
    Pickup(ConnectionArgs),
    /// Obtain new credentials from the TPP platform
    Getcred(ConnectionArgs),
    /// Revoke an issued certificate
    Revoke(ConnectionArgs),
    /// Renew an issued certificate
    Renew(ConnectionArgs),
}

impl Commands {
    pub fn kind(&self) -> CommandKind {
        match self {
            Commands::Enroll(_) => CommandKind::Enroll,
            Commands::Pickup(_) => CommandKind::Pickup,
            Commands::Getcred(_) => CommandKind::Getcred,
            Commands::Revoke(_) => CommandKind::Revoke,
            Commands::Renew(_) => CommandKind::Renew,
        }
    }

    pub fn connection(&self) -> &ConnectionArgs {
        match self {
            Commands::Enroll(args)
            | Commands::Pickup(args)
            | Commands::Getcred(args)
            | Commands::Revoke(args)
            | Commands::Renew(args) => args,
        }
    }
}

/// Connection and configuration flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Path to a configuration file with named profiles
    #[arg(long)]
    pub config: Option<String>,
    /// Profile to read from the configuration file
    #[arg(long)]
    pub profile: Option<String>,
    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,
    /// Run against the built-in fake endpoint instead of a live service
    #[arg(long)]
    pub test_mode: bool,
    /// Upper bound in seconds for the emulated endpoint delay (0 disables it)
    #[arg(long, default_value_t = 0)]
    pub test_mode_delay: u64,
    /// TPP username
    #[arg(long)]
    pub tpp_user: Option<String>,
    /// TPP access token (refresh token for getcred)
    #[arg(long)]
    pub tpp_token: Option<String>,
    /// TPP password
    #[arg(long)]
    pub tpp_password: Option<String>,
    /// Path to a PKCS#12 client certificate for TPP
    #[arg(long)]
    pub client_p12: Option<String>,
    /// Service URL, regardless of connector
    #[arg(short = 'u', long)]
    pub url: Option<String>,
    /// TPP service URL
    #[arg(long)]
    pub tpp_url: Option<String>,
    /// Cloud service URL
    #[arg(long)]
    pub cloud_url: Option<String>,
    /// Cloud API key
    #[arg(short = 'k', long)]
    pub apikey: Option<String>,
    /// Path to a PEM trust bundle used to validate the service's TLS identity
    #[arg(long)]
    pub trust_bundle: Option<String>,
    /// Policy zone governing issuance
    #[arg(short = 'z', long)]
    pub zone: Option<String>,
    /// Pickup ID of a previously requested certificate
    #[arg(long)]
    pub pickup_id: Option<String>,
    /// File containing the pickup ID
    #[arg(long)]
    pub pickup_id_file: Option<String>,
}

impl ConnectionArgs {
    /// The flag record consumed by configuration resolution.
    pub fn flag_set(&self) -> FlagSet {
        FlagSet {
            config_file: self.config.clone(),
            profile: self.profile.clone(),
            verbose: self.verbose,
            test_mode: self.test_mode,
            test_mode_delay: self.test_mode_delay,
            tpp_user: self.tpp_user.clone(),
            tpp_token: self.tpp_token.clone(),
            tpp_password: self.tpp_password.clone(),
            client_p12: self.client_p12.clone(),
            url: self.url.clone(),
            tpp_url: self.tpp_url.clone(),
            cloud_url: self.cloud_url.clone(),
            api_key: self.apikey.clone(),
            trust_bundle: self.trust_bundle.clone(),
            zone: self.zone.clone(),
            pickup_id: self.pickup_id.clone(),
            pickup_id_file: self.pickup_id_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_kinds_map_one_to_one() {
        let args = || ConnectionArgs::default();
        assert_eq!(Commands::Enroll(args()).kind(), CommandKind::Enroll);
        assert_eq!(Commands::Pickup(args()).kind(), CommandKind::Pickup);
        assert_eq!(Commands::Getcred(args()).kind(), CommandKind::Getcred);
        assert_eq!(Commands::Revoke(args()).kind(), CommandKind::Revoke);
        assert_eq!(Commands::Renew(args()).kind(), CommandKind::Renew);
    }

    #[test]
    fn test_flag_set_carries_every_flag() {
        let args = ConnectionArgs {
            config: Some("certops.toml".into()),
            profile: Some("staging".into()),
            verbose: true,
            test_mode: true,
            test_mode_delay: 5,
            tpp_user: Some("admin".into()),
            tpp_token: Some("tok".into()),
            tpp_password: Some("secret".into()),
            client_p12: Some("client.p12".into()),
            url: Some("https://example.com".into()),
            tpp_url: Some("https://tpp.example.com".into()),
            cloud_url: Some("https://api.example.com".into()),
            apikey: Some("key".into()),
            trust_bundle: Some("bundle.pem".into()),
            zone: Some("ops".into()),
            pickup_id: Some("id".into()),
            pickup_id_file: Some("id.txt".into()),
        };
        let flags = args.flag_set();
        assert_eq!(flags.config_file.as_deref(), Some("certops.toml"));
        assert_eq!(flags.profile.as_deref(), Some("staging"));
        assert!(flags.verbose);
        assert!(flags.test_mode);
        assert_eq!(flags.test_mode_delay, 5);
        assert_eq!(flags.api_key.as_deref(), Some("key"));
        assert_eq!(flags.zone.as_deref(), Some("ops"));
        assert_eq!(flags.pickup_id_file.as_deref(), Some("id.txt"));
    }
}
