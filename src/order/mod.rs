//! Order action: message formatting, contact channel, QR code.

pub mod contact;
pub mod message;
pub mod qr;

pub use contact::{ContactChannel, OrderAction};
pub use message::OrderSummary;
