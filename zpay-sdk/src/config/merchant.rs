//! Merchant configuration.

use url::Url;

use crate::objects::Channel;

/// Default checksum algorithm identifier. The gateway currently accepts
/// only MD5.
pub const DEFAULT_SIGN_TYPE: &str = "MD5";

/// Merchant credentials and endpoints for one gateway account.
///
/// Immutable once constructed; the URL builder only reads it, so a single
/// value can be shared across threads. None of the fields are validated;
/// the gateway contract treats them as opaque text supplied by the
/// merchant.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    /// Merchant identifier assigned by the gateway.
    pub pid: String,
    /// Shared secret key appended raw when computing checksums.
    pub key: String,
    /// Gateway base URL (e.g. `https://z-pay.cn`).
    pub gateway: Url,
    /// Payment channel orders are submitted to.
    pub channel: Channel,
    /// Checksum algorithm identifier sent as `sign_type`.
    pub sign_type: String,
    /// URL the gateway calls asynchronously once the order is paid.
    pub notify_url: String,
    /// URL the payer's browser is redirected back to after payment.
    pub return_url: String,
}

impl MerchantConfig {
    /// Create a new MerchantConfig with the default channel (Alipay) and
    /// sign type.
    pub fn new(
        pid: impl Into<String>,
        key: impl Into<String>,
        gateway: Url,
        notify_url: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            pid: pid.into(),
            key: key.into(),
            gateway,
            channel: Channel::default(),
            sign_type: DEFAULT_SIGN_TYPE.to_string(),
            notify_url: notify_url.into(),
            return_url: return_url.into(),
        }
    }

    /// Replace the default payment channel.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}
