use std::process;

use anyhow::Result;
use clap::Parser;
use log::{debug, error};

use certops::cli::Cli;
use certops::config::{self, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let connection = cli.command.connection();

    init_logger(connection.verbose);
    debug!("Starting certops");

    let flags = connection.flag_set();
    let config = match config::resolve(cli.command.kind(), &flags) {
        Ok(config) => config,
        Err(err) if err.is_fatal() => {
            // Unrecoverable operator error; stop before any network activity.
            error!("{:#}", anyhow::Error::from(err));
            process::exit(2);
        }
        Err(err) => return Err(err.into()),
    };

    // The connectors live in the issuance library; this front-end resolves
    // the connection settings and reports what would be used.
    report(&config);
    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn report(config: &Config) {
    println!("Connector:    {}", config.connector);
    if let Some(url) = &config.base_url {
        println!("URL:          {url}");
    }
    println!("Zone:         {}", config.zone.as_deref().unwrap_or("(none)"));
    println!("Credentials:  {}", config.credentials.kind());
    if config.trust_bundle.is_some() {
        println!("Trust bundle: supplied");
    }
}
