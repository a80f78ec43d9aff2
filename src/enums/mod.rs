//! Enumerated types.

mod confirmation_method;
mod language;
mod session_state;
mod trade_offer_state;

pub use confirmation_method::ConfirmationMethod;
pub use language::Language;
pub use session_state::SessionState;
pub use trade_offer_state::TradeOfferState;
