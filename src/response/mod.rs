//! Models for responses.

mod asset;
mod login;
mod trade_offer;

pub use asset::Asset;
pub use login::{LoginResponse, RsaKeyResponse};
pub(crate) use login::NO_CAPTCHA_GID;
pub use trade_offer::TradeOffer;
