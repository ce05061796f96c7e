//! Merchant-side SDK for epay-compatible aggregate payment gateways
//! (z-pay.cn protocol family).
//!
//! The gateway's cashier accepts a browser redirect to `/submit.php` with
//! the order fields as a GET query string plus an MD5 checksum computed
//! with the merchant's secret key.  This crate builds that URL:
//!
//! ```
//! use url::Url;
//! use zpay_sdk::{Gateway, MerchantConfig};
//!
//! let config = MerchantConfig::new(
//!     "1001",
//!     "testkey",
//!     Url::parse("https://z-pay.cn").unwrap(),
//!     "https://example.com/api/payment/notify",
//!     "https://example.com/payment/success",
//! );
//! let gateway = Gateway::new(config);
//!
//! let url = gateway.payment_url("Widget", "9.99", "ORDER123");
//! assert!(url.starts_with("https://z-pay.cn/submit.php?"));
//! ```
//!
//! The crate only constructs URLs.  Submitting them (the browser redirect)
//! and handling the gateway's notify callback happen elsewhere.

#![forbid(unsafe_code)]

pub mod config;
pub mod gateway;
pub mod objects;
pub mod signature;

pub use config::{ConfigError, FileConfig, MerchantConfig};
pub use gateway::Gateway;
pub use objects::{Channel, PaymentOrder, generate_out_trade_no};
