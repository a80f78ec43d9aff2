//! Logs in to Steam Community and manages trade offers through the Steam Web API.
//!
//! A [`SteamUser`] owns one cookie jar. Cookies issued while logging in are sent with every
//! later request, including calls to `IEconService`.
//!
//! ```no_run
//! use steam_web_session::{SteamUser, SessionState};
//!
//! # async fn run() -> Result<(), steam_web_session::Error> {
//! let mut user = SteamUser::builder("API_KEY").build()?;
//!
//! if user.login_with_password("username", "password").await? == SessionState::LoggedIn {
//!     for offer in user.get_incoming_offers().await? {
//!         println!("{offer} is {}", offer.trade_offer_state);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod community;
mod helpers;
mod user;

pub mod enums;
pub mod error;
pub mod response;
pub mod serialize;
pub mod types;

pub use api::SteamTradeOfferAPI;
pub use community::{SteamCommunity, encrypt_password};
pub use user::{SteamUser, SteamUserBuilder};
pub use enums::{ConfirmationMethod, Language, SessionState, TradeOfferState};
pub use error::{Error, Result};
pub use response::{Asset, LoginResponse, RsaKeyResponse, TradeOffer};
pub use steamid_ng::SteamID;
