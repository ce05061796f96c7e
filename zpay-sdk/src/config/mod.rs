//! Configuration types for the gateway SDK.
//!
//! [`MerchantConfig`] is the runtime configuration handed to the URL
//! builder; [`FileConfig`] maps the TOML file format and converts into it.

mod file;
mod merchant;

pub use file::{ConfigError, FileConfig, MerchantSection};
pub use merchant::{DEFAULT_SIGN_TYPE, MerchantConfig};
