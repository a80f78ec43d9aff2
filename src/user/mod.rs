//! A Steam account: one community session and one Web API client sharing a cookie jar.

mod builder;

pub use builder::SteamUserBuilder;

use crate::api::SteamTradeOfferAPI;
use crate::community::SteamCommunity;
use crate::enums::{Language, SessionState};
use crate::error::Error;
use crate::response::{LoginResponse, TradeOffer};
use crate::types::TradeOfferId;
use std::collections::HashMap;
use std::sync::Arc;
use reqwest::cookie::Jar;

/// A Steam account. Cookies set while logging in are sent with every later request, including
/// Web API calls.
///
/// Each instance has its own cookie jar and client. Create one per account.
#[derive(Debug)]
pub struct SteamUser {
    /// The cookies shared by the community session and the API.
    pub(crate) cookies: Arc<Jar>,
    /// The community session.
    pub(crate) community: SteamCommunity,
    /// The Web API client.
    pub(crate) api: SteamTradeOfferAPI,
}

impl SteamUser {
    /// Creates a builder for a [`SteamUser`] using your account's API key from
    /// <https://steamcommunity.com/dev/apikey>.
    pub fn builder<T>(api_key: T) -> SteamUserBuilder
    where
        T: Into<String>,
    {
        SteamUserBuilder::new(api_key)
    }

    /// The community session.
    pub fn community(&self) -> &SteamCommunity {
        &self.community
    }

    /// The Web API client.
    pub fn api(&self) -> &SteamTradeOfferAPI {
        &self.api
    }

    /// The cookie jar shared by the community session and the API.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        Arc::clone(&self.cookies)
    }

    /// The current authentication phase.
    pub fn session_state(&self) -> SessionState {
        self.community.session_state()
    }

    /// Whether the last login attempt completed.
    pub fn is_logged_in(&self) -> bool {
        self.community.is_logged_in()
    }

    /// The response to the last login attempt.
    pub fn login_response(&self) -> Option<&LoginResponse> {
        self.community.login_response()
    }

    /// The URL of the captcha image issued by the last login attempt.
    pub fn captcha_url(&self) -> Option<String> {
        self.community.captcha_url()
    }

    /// Logs in to Steam Community. See [`SteamCommunity::login`].
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        steam_guard_code: Option<&str>,
        captcha_text: Option<&str>,
    ) -> Result<SessionState, Error> {
        self.community.login(username, password, steam_guard_code, captcha_text).await
    }

    /// Logs in without a captcha or Steam Guard code.
    pub async fn login_with_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<SessionState, Error> {
        self.community.login_with_password(username, password).await
    }

    /// Adds a cookie for the community site.
    pub fn add_cookie(
        &self,
        name: &str,
        value: &str,
        secure: bool,
    ) {
        self.community.add_cookie(name, value, secure);
    }

    /// Gets trade offers. See [`SteamTradeOfferAPI::get_trade_offers`].
    pub async fn get_trade_offers(
        &self,
        params: HashMap<String, String>,
    ) -> Result<Vec<TradeOffer>, Error> {
        self.api.get_trade_offers(params).await
    }

    /// Gets offers sent to us.
    pub async fn get_incoming_offers(&self) -> Result<Vec<TradeOffer>, Error> {
        self.api.get_incoming_offers().await
    }

    /// Gets offers we sent.
    pub async fn get_outgoing_offers(&self) -> Result<Vec<TradeOffer>, Error> {
        self.api.get_outgoing_offers().await
    }

    /// Gets a single trade offer with localized fields in `language`.
    pub async fn get_trade_offer(
        &self,
        tradeofferid: TradeOfferId,
        language: Language,
    ) -> Result<TradeOffer, Error> {
        self.api.get_trade_offer(tradeofferid, language).await
    }

    /// Cancels an offer we sent.
    pub async fn cancel_offer(
        &self,
        tradeofferid: TradeOfferId,
    ) -> Result<(), Error> {
        self.api.cancel_offer(tradeofferid).await
    }
}
