//! Bodies of IEconService responses.
//!
//! Offers come either wrapped in the `{"response": ...}` envelope or bare. Every level is checked
//! to be the JSON type expected there before it is decoded, so a record is never read from an
//! array by position.

use crate::response::TradeOffer;
use serde::{Deserialize, Deserializer};
use serde::de::{self, Unexpected};
use serde_json::{Map, Value};

const RESPONSE: &str = "response";

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn offer_from_value<E>(value: Value) -> Result<TradeOffer, E>
where
    E: de::Error,
{
    match value {
        Value::Object(_) => TradeOffer::deserialize(value).map_err(E::custom),
        other => Err(E::invalid_type(unexpected(&other), &"a trade offer object")),
    }
}

fn offers_from_value<E>(value: Value) -> Result<Vec<TradeOffer>, E>
where
    E: de::Error,
{
    match value {
        Value::Array(offers) => offers
            .into_iter()
            .map(offer_from_value::<E>)
            .collect(),
        other => Err(E::invalid_type(unexpected(&other), &"an array of trade offers")),
    }
}

/// Takes the object under `response` out of an envelope.
fn response_body<E>(mut envelope: Map<String, Value>) -> Result<Map<String, Value>, E>
where
    E: de::Error,
{
    match envelope.remove(RESPONSE) {
        Some(Value::Object(body)) => Ok(body),
        Some(other) => Err(E::invalid_type(unexpected(&other), &"a response object")),
        None => Err(E::missing_field(RESPONSE)),
    }
}

/// The offers of a `GetTradeOffers` response, sent offers followed by received offers.
#[derive(Debug)]
pub struct GetTradeOffersResponse(pub Vec<TradeOffer>);

impl<'de> Deserialize<'de> for GetTradeOffersResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(offers) => offers_from_value(Value::Array(offers)).map(Self),
            Value::Object(envelope) => {
                let mut body = response_body::<D::Error>(envelope)?;
                let mut offers = Vec::new();

                for key in ["trade_offers_sent", "trade_offers_received"] {
                    if let Some(value) = body.remove(key) {
                        offers.extend(offers_from_value::<D::Error>(value)?);
                    }
                }

                Ok(Self(offers))
            },
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"an array of trade offers or a response object",
            )),
        }
    }
}

/// The offer of a `GetTradeOffer` response. `None` when the envelope holds no offer.
#[derive(Debug)]
pub struct GetTradeOfferResponse(pub Option<TradeOffer>);

impl<'de> Deserialize<'de> for GetTradeOfferResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(envelope) if envelope.contains_key(RESPONSE) => {
                response_body::<D::Error>(envelope)?
                    .remove("offer")
                    .map(offer_from_value::<D::Error>)
                    .transpose()
                    .map(Self)
            },
            Value::Object(offer) => offer_from_value(Value::Object(offer)).map(Some).map(Self),
            other => Err(de::Error::invalid_type(unexpected(&other), &"a trade offer object")),
        }
    }
}

/// The body of a cancel response carries nothing useful, but it must be the usual envelope.
#[derive(Debug)]
pub struct CancelTradeOfferResponse;

impl<'de> Deserialize<'de> for CancelTradeOfferResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(envelope) => response_body::<D::Error>(envelope).map(|_| Self),
            other => Err(de::Error::invalid_type(unexpected(&other), &"a response object")),
        }
    }
}
