//! Calls to the official Steam Web API trade offer endpoints. Every request is made with the
//! API key and `format=json`; callers only supply the method-specific parameters.

mod response;

use response::{
    CancelTradeOfferResponse,
    GetTradeOfferResponse,
    GetTradeOffersResponse,
};
use crate::enums::Language;
use crate::error::Error;
use crate::helpers::{join_url, parses_response};
use crate::response::TradeOffer;
use crate::types::TradeOfferId;
use std::collections::HashMap;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

const INTERFACE: &str = "IEconService";
const GET_SENT_OFFERS: &str = "get_sent_offers";
const GET_RECEIVED_OFFERS: &str = "get_received_offers";
/// Header the Web API uses to report the result of a call.
const ERESULT_HEADER: &str = "x-eresult";
/// `EResult::OK`.
const ERESULT_OK: i32 = 1;

/// How the parameters of a call are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestMethod {
    /// Parameters go in the query string.
    Get,
    /// Parameters go in a form body.
    Post,
}

/// The underlying API for trade offers.
#[derive(Debug, Clone)]
pub struct SteamTradeOfferAPI {
    /// The client for making requests.
    client: ClientWithMiddleware,
    /// Your account's API key from <https://steamcommunity.com/dev/apikey>.
    key: String,
    /// The default language for localized fields.
    language: Language,
    /// Base URL of the Web API.
    api_url: Url,
}

impl SteamTradeOfferAPI {
    pub(crate) fn new(
        client: ClientWithMiddleware,
        key: String,
        language: Language,
        api_url: Url,
    ) -> Self {
        Self {
            client,
            key,
            language,
            api_url,
        }
    }

    /// The API key requests are made with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The default language used by [`SteamTradeOfferAPI::get_trade_offer_default_language`].
    pub fn language(&self) -> Language {
        self.language
    }

    fn get_api_url(
        &self,
        interface: &str,
        method: &str,
        version: usize,
    ) -> Result<Url, Error> {
        Ok(join_url(&self.api_url, &format!("/{interface}/{method}/v{version}"))?)
    }

    /// Makes a call to an `IEconService` method. The `key` and `format` parameters are always
    /// set here; entries with those names in `params` are ignored.
    async fn call_api(
        &self,
        request_method: RequestMethod,
        method: &str,
        params: &HashMap<String, String>,
    ) -> Result<reqwest::Response, Error> {
        let uri = self.get_api_url(INTERFACE, method, 1)?;
        let auth = [("key", self.key.as_str()), ("format", "json")];
        let params = params
            .iter()
            .filter(|(key, _)| key.as_str() != "key" && key.as_str() != "format")
            .collect::<Vec<_>>();

        log::debug!("{request_method:?} {INTERFACE}/{method} with {} parameters", params.len());

        let request = match request_method {
            RequestMethod::Get => self.client.get(uri)
                .query(&auth)
                .query(&params),
            RequestMethod::Post => self.client.post(uri)
                .query(&auth)
                .form(&params),
        };
        let response = request.send().await?;

        check_eresult(&response)?;

        Ok(response)
    }

    /// Gets trade offers. `params` are passed through to `GetTradeOffers`. When neither
    /// `get_sent_offers` nor `get_received_offers` is given, both are requested.
    pub async fn get_trade_offers(
        &self,
        mut params: HashMap<String, String>,
    ) -> Result<Vec<TradeOffer>, Error> {
        if !params.contains_key(GET_SENT_OFFERS) && !params.contains_key(GET_RECEIVED_OFFERS) {
            params.insert(GET_SENT_OFFERS.into(), "true".into());
            params.insert(GET_RECEIVED_OFFERS.into(), "true".into());
        }

        let response = self.call_api(RequestMethod::Get, "GetTradeOffers", &params).await?;
        let GetTradeOffersResponse(offers) = parses_response(response).await?;

        Ok(offers)
    }

    /// Gets offers sent to us.
    pub async fn get_incoming_offers(&self) -> Result<Vec<TradeOffer>, Error> {
        let params = HashMap::from([(GET_RECEIVED_OFFERS.to_string(), "true".to_string())]);

        self.get_trade_offers(params).await
    }

    /// Gets offers we sent.
    pub async fn get_outgoing_offers(&self) -> Result<Vec<TradeOffer>, Error> {
        let params = HashMap::from([(GET_SENT_OFFERS.to_string(), "true".to_string())]);

        self.get_trade_offers(params).await
    }

    /// Gets a single trade offer with localized fields in `language`.
    pub async fn get_trade_offer(
        &self,
        tradeofferid: TradeOfferId,
        language: Language,
    ) -> Result<TradeOffer, Error> {
        let params = HashMap::from([
            ("tradeofferid".to_string(), tradeofferid.to_string()),
            ("language".to_string(), language.api_language_code().to_string()),
        ]);
        let response = self.call_api(RequestMethod::Get, "GetTradeOffer", &params).await?;
        let GetTradeOfferResponse(offer) = parses_response(response).await?;

        offer.ok_or_else(|| Error::Response(format!("No offer in response for {tradeofferid}")))
    }

    /// Gets a single trade offer using the language this API was built with.
    pub async fn get_trade_offer_default_language(
        &self,
        tradeofferid: TradeOfferId,
    ) -> Result<TradeOffer, Error> {
        self.get_trade_offer(tradeofferid, self.language).await
    }

    /// Cancels an offer we sent. Fails if the status, the `x-eresult` header or the body
    /// indicate the call did not go through.
    pub async fn cancel_offer(
        &self,
        tradeofferid: TradeOfferId,
    ) -> Result<(), Error> {
        let params = HashMap::from([("tradeofferid".to_string(), tradeofferid.to_string())]);
        let response = self.call_api(RequestMethod::Post, "CancelTradeOffer", &params).await?;
        let _: CancelTradeOfferResponse = parses_response(response).await?;

        log::debug!("Canceled offer {tradeofferid}");

        Ok(())
    }
}

fn check_eresult(response: &reqwest::Response) -> Result<(), Error> {
    let eresult = response.headers()
        .get(ERESULT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i32>().ok());

    match eresult {
        Some(code) if code != ERESULT_OK => Err(Error::EResult(code)),
        _ => Ok(()),
    }
}
