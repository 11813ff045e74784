//! Input shape validation.

mod wallet;

pub use wallet::validate_wallet_address;
