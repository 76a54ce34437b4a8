use clap::Args;
use ethereum_consensus::serde::try_bytes_from_hex_str;
use eyre::WrapErr;
use mev_client_rs::{Client, Config as ClientConfig, SigningIdentity};
use serde::Deserialize;
use std::{fmt, path::Path, sync::Arc};
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    pub fn from_toml_file<P: AsRef<Path> + fmt::Display + Clone>(path: P) -> eyre::Result<Config> {
        tracing::info!("loading config from `{path}`...");

        let config_data = std::fs::read_to_string(path.as_ref())
            .wrap_err_with(|| format!("could not read config from `{path}`"))?;

        toml::from_str(&config_data).wrap_err("could not parse TOML")
    }

    pub fn signing_identity(&self) -> eyre::Result<SigningIdentity> {
        match &self.client.secret_key {
            Some(secret_key) => {
                let bytes = try_bytes_from_hex_str(secret_key)
                    .wrap_err("could not decode secret key as hex")?;
                SigningIdentity::try_from(bytes.as_slice()).wrap_err("invalid secret key")
            }
            None => {
                warn!("no secret key configured; generating an ephemeral validator identity");
                Ok(SigningIdentity::random(&mut rand::thread_rng())?)
            }
        }
    }

    pub fn build_client(&self) -> eyre::Result<Client> {
        let identity = Arc::new(self.signing_identity()?);
        let client = Client::from_host(&self.client.endpoint, self.client.timeout, identity)?;
        info!(endpoint = %client.endpoint(), public_key = %client.public_key(), "configured builder client");
        Ok(client)
    }
}

/// Location of the TOML configuration, shared by every command.
#[derive(Debug, Args)]
pub struct ConfigFile {
    #[clap(long, env = "CONFIG_FILE", default_value = "config.toml")]
    pub config_file: String,
}

impl ConfigFile {
    pub fn load(&self) -> eyre::Result<Config> {
        Config::from_toml_file(&self.config_file)
    }
}

#[derive(Debug, Args)]
#[clap(about = "🔬 (debug) utility to verify configuration")]
pub struct Command {
    #[clap(flatten)]
    config: ConfigFile,
}

impl Command {
    pub async fn execute(self) -> eyre::Result<()> {
        let config = self.config.load()?;
        info!("{config:#?}");

        let client = config.build_client()?;
        info!(endpoint = %client.endpoint(), "configuration is valid");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [client]
            endpoint = "builder.example.com:3500"
            timeout_ms = 1500
            fee_recipient = "0x4242424242424242424242424242424242424242"
            gas_limit = 30000000
            secret_key = "0x0101010101010101010101010101010101010101010101010101010101010101"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.gas_limit, 30_000_000);

        let client = config.build_client().unwrap();
        assert_eq!(client.endpoint().to_string(), "http://builder.example.com:3500/");
        let expected = SigningIdentity::try_from([1u8; 32].as_ref()).unwrap();
        assert_eq!(client.public_key(), expected.public_key());
    }

    #[test]
    fn test_missing_client_table_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.client.endpoint, mev_client_rs::Config::default().endpoint);
        assert!(config.build_client().is_ok());
    }

    #[test]
    fn test_config_debug_hides_secret_key() {
        let config: Config = toml::from_str(
            r#"
            [client]
            secret_key = "0x0101010101010101010101010101010101010101010101010101010101010101"
            "#,
        )
        .unwrap();
        assert!(config.client.secret_key.is_some());
        assert!(!format!("{config:#?}").contains("0101010101"));
    }
}
