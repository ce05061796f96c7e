use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One payment order to submit to the gateway.
///
/// Field values are passed to the gateway verbatim; nothing is validated,
/// formatted, or escaped here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Product name shown on the gateway's cashier page.
    pub name: String,
    /// Order amount as decimal text, normally with two decimal places.
    pub money: String,
    /// Merchant-side order number. The gateway rejects duplicates; the SDK
    /// does not enforce uniqueness.
    pub out_trade_no: String,
    /// Opaque attachment echoed back unchanged in the gateway's notify
    /// call. Absent fields are neither serialized nor signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Merchant site name shown on the cashier page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitename: Option<String>,
}

impl PaymentOrder {
    /// Create an order from raw text fields.
    pub fn new(
        name: impl Into<String>,
        money: impl Into<String>,
        out_trade_no: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            money: money.into(),
            out_trade_no: out_trade_no.into(),
            param: None,
            sitename: None,
        }
    }

    /// Create an order from a decimal amount, formatted with exactly two
    /// decimal places as the gateway expects.
    pub fn with_amount(
        name: impl Into<String>,
        amount: Decimal,
        out_trade_no: impl Into<String>,
    ) -> Self {
        Self::new(name, format!("{:.2}", amount.round_dp(2)), out_trade_no)
    }

    /// Attach an opaque passthrough value.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Set the merchant site name.
    pub fn with_sitename(mut self, sitename: impl Into<String>) -> Self {
        self.sitename = Some(sitename.into());
        self
    }
}

/// Generate a merchant order number: the current UTC time as
/// `YYYYMMDDHHMMSS` plus a zero-padded three-digit random suffix.
///
/// This is a convenience for callers without their own order numbering;
/// the URL builder never calls it.
pub fn generate_out_trade_no() -> String {
    let now = OffsetDateTime::now_utc();
    let suffix: u16 = rand::rng().random_range(0..1000);
    format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}{:03}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_amount_formats_two_places() {
        let order = PaymentOrder::with_amount("Widget", Decimal::new(999, 2), "O1");
        assert_eq!(order.money, "9.99");

        let order = PaymentOrder::with_amount("Widget", Decimal::from(5), "O2");
        assert_eq!(order.money, "5.00");

        let order = PaymentOrder::with_amount("Widget", Decimal::new(10005, 3), "O3");
        assert_eq!(order.money, "10.00");
    }

    #[test]
    fn test_builder_setters() {
        let order = PaymentOrder::new("Widget", "9.99", "O1")
            .with_param("extra")
            .with_sitename("My Shop");
        assert_eq!(order.param.as_deref(), Some("extra"));
        assert_eq!(order.sitename.as_deref(), Some("My Shop"));
    }

    #[test]
    fn test_generated_order_no_shape() {
        let no = generate_out_trade_no();
        assert_eq!(no.len(), 17);
        assert!(no.chars().all(|c| c.is_ascii_digit()));
    }
}
