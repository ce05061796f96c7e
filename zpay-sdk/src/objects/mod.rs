//! Request types sent to the gateway.

mod channel;
mod order;

pub use channel::Channel;
pub use order::{PaymentOrder, generate_out_trade_no};
