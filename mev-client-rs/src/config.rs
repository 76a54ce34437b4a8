use crate::types::ExecutionAddress;
use serde::Deserialize;
use std::{fmt, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:18550";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_GAS_LIMIT: u64 = 36_000_000;

#[derive(Deserialize)]
#[serde(default)]
pub struct Config {
    /// Either a full URL or a bare `host:port`.
    pub endpoint: String,
    #[serde(rename = "timeout_ms", with = "crate::serde::as_millis")]
    pub timeout: Duration,
    pub fee_recipient: ExecutionAddress,
    pub gas_limit: u64,
    /// Hex-encoded BLS secret key; when absent a throwaway key is generated.
    pub secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fee_recipient: ExecutionAddress::ZERO,
            gas_limit: DEFAULT_GAS_LIMIT,
            secret_key: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("fee_recipient", &self.fee_recipient)
            .field("gas_limit", &self.gas_limit)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{"endpoint":"https://builder.example.com:3500"}"#).unwrap();
        assert_eq!(config.endpoint, "https://builder.example.com:3500");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.gas_limit, DEFAULT_GAS_LIMIT);
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn test_config_fields() {
        let config: Config = serde_json::from_str(
            r#"{
                "endpoint": "builder:3500",
                "timeout_ms": 250,
                "fee_recipient": "0x1111111111111111111111111111111111111111",
                "gas_limit": 30000000
            }"#,
        )
        .unwrap();
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.fee_recipient, ExecutionAddress::repeat_byte(0x11));
        assert_eq!(config.gas_limit, 30_000_000);
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let secret_key = "0x0101010101010101010101010101010101010101010101010101010101010101";
        let config = Config { secret_key: Some(secret_key.to_string()), ..Default::default() };
        let debug = format!("{config:?}");
        assert!(!debug.contains("0101010101"));
        assert!(debug.contains("<redacted>"));
        assert!(!format!("{config:#?}").contains(secret_key));
    }
}
