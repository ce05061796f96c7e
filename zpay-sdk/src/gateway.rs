//! Signed cashier URL construction.
//!
//! The gateway's cashier is a plain GET endpoint: the merchant backend
//! builds a URL carrying the order fields plus a keyed checksum and
//! redirects the payer's browser to it.  The gateway recomputes the
//! checksum with the shared secret before rendering the payment page.

use crate::config::MerchantConfig;
use crate::objects::PaymentOrder;
use crate::signature;

/// Builds signed cashier URLs for one merchant account.
///
/// Holds an immutable [`MerchantConfig`]; every call is a pure function of
/// the order fields and that configuration, so one value can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: MerchantConfig,
}

impl Gateway {
    /// Create a new Gateway for the given merchant account.
    pub fn new(config: MerchantConfig) -> Self {
        Self { config }
    }

    /// Access the merchant configuration.
    pub fn config(&self) -> &MerchantConfig {
        &self.config
    }

    /// Build a signed cashier URL for `order`.
    ///
    /// The order fields and the configured merchant fields are serialized
    /// in byte-lexicographic key order, checksummed with the secret key,
    /// and appended to `<gateway>/submit.php?`.  Values go out exactly as
    /// given: empty strings stay in place and nothing is percent-encoded
    /// (see [`crate::signature`]).
    pub fn submit_url(&self, order: &PaymentOrder) -> String {
        let cfg = &self.config;
        let mut pairs: Vec<(&str, &str)> = vec![
            ("name", order.name.as_str()),
            ("money", order.money.as_str()),
            ("type", cfg.channel.as_str()),
            ("out_trade_no", order.out_trade_no.as_str()),
            ("notify_url", cfg.notify_url.as_str()),
            ("pid", cfg.pid.as_str()),
            ("return_url", cfg.return_url.as_str()),
        ];
        if let Some(param) = &order.param {
            pairs.push(("param", param));
        }
        if let Some(sitename) = &order.sitename {
            pairs.push(("sitename", sitename));
        }

        let sign = signature::sign_pairs(&pairs, &cfg.key);
        pairs.push(("sign_type", cfg.sign_type.as_str()));
        pairs.push(("sign", sign.as_str()));
        signature::canonicalize(&mut pairs);
        let query = signature::join_raw(&pairs);

        tracing::debug!(out_trade_no = %order.out_trade_no, "built signed cashier url");

        format!(
            "{}/submit.php?{}",
            cfg.gateway.as_str().trim_end_matches('/'),
            query
        )
    }

    /// Build a signed cashier URL from raw order fields.
    pub fn payment_url(&self, name: &str, money: &str, out_trade_no: &str) -> String {
        self.submit_url(&PaymentOrder::new(name, money, out_trade_no))
    }
}
