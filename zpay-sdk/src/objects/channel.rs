use serde::{Deserialize, Serialize};

/// Payment channels accepted by the gateway.
///
/// The wire value is sent as the `type` parameter of the submit request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Alipay,
    Wxpay,
    Qqpay,
}

impl Channel {
    /// Wire value used for the `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Alipay => "alipay",
            Channel::Wxpay => "wxpay",
            Channel::Qqpay => "qqpay",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
