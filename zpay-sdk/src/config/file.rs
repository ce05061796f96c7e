//! TOML file configuration structures.
//!
//! These structs directly map to the `zpay.toml` file format and convert
//! into the runtime [`MerchantConfig`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

use crate::config::MerchantConfig;
use crate::config::merchant::DEFAULT_SIGN_TYPE;
use crate::objects::Channel;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub merchant: MerchantSection,
}

/// `[merchant]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantSection {
    /// Merchant identifier assigned by the gateway.
    pub pid: String,
    /// Shared secret key for request checksums.
    pub key: String,
    /// Gateway base URL.
    pub gateway: Url,
    /// Payment channel; defaults to `alipay`.
    #[serde(default)]
    pub channel: Channel,
    /// Checksum algorithm identifier; defaults to `MD5`.
    #[serde(default = "default_sign_type")]
    pub sign_type: String,
    /// Async notify callback URL.
    pub notify_url: String,
    /// Browser return-redirect URL.
    pub return_url: String,
}

fn default_sign_type() -> String {
    DEFAULT_SIGN_TYPE.to_string()
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl FileConfig {
    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Convert into the runtime merchant configuration.
    pub fn into_merchant(self) -> MerchantConfig {
        let m = self.merchant;
        MerchantConfig {
            pid: m.pid,
            key: m.key,
            gateway: m.gateway,
            channel: m.channel,
            sign_type: m.sign_type,
            notify_url: m.notify_url,
            return_url: m.return_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[merchant]
pid = "20220726190052"
key = "vg9ZRZN4FOKtDM06UfqH69GDJoG4gGIJ"
gateway = "https://z-pay.cn"
channel = "wxpay"
sign_type = "MD5"
notify_url = "https://example.com/api/payment/notify"
return_url = "https://example.com/payment/success"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.merchant.pid, "20220726190052");
        assert_eq!(config.merchant.channel, Channel::Wxpay);

        let merchant = config.into_merchant();
        assert_eq!(merchant.gateway.as_str(), "https://z-pay.cn/");
        assert_eq!(merchant.sign_type, "MD5");
    }

    #[test]
    fn test_defaults_applied() {
        let toml_str = r#"
[merchant]
pid = "1001"
key = "testkey"
gateway = "https://z-pay.cn"
notify_url = "http://a/n"
return_url = "http://a/r"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.merchant.channel, Channel::Alipay);
        assert_eq!(config.merchant.sign_type, "MD5");
    }
}
