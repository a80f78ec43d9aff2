use super::Asset;
use crate::enums::{ConfirmationMethod, TradeOfferState};
use crate::serialize::{
    string,
    option_string,
    empty_string_is_none,
    ts_seconds_option_none_when_zero,
};
use crate::types::{ServerTime, TradeId, TradeOfferId};
use std::fmt;
use chrono::serde::ts_seconds;
use serde::{Serialize, Deserialize};
use steamid_ng::SteamID;

/// A trade offer as returned by the Web API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TradeOffer {
    /// The ID for this offer.
    #[serde(with = "string")]
    pub tradeofferid: TradeOfferId,
    /// The trade ID for this offer. This should be present when the `trade_offer_state` of this
    /// offer is [`TradeOfferState::Accepted`].
    #[serde(default, with = "option_string")]
    pub tradeid: Option<TradeId>,
    /// The 32-bit account ID of our partner.
    pub accountid_other: u32,
    /// The message included in the offer. If the message is empty or not present this will be
    /// `None`.
    #[serde(default, deserialize_with = "empty_string_is_none")]
    pub message: Option<String>,
    /// The items we're receiving in this offer.
    #[serde(default)]
    pub items_to_receive: Vec<Asset>,
    /// The items we're giving in this offer.
    #[serde(default)]
    pub items_to_give: Vec<Asset>,
    /// Whether this offer was created by us or not.
    #[serde(default)]
    pub is_our_offer: bool,
    /// Whether this offer originated from a real time trade.
    #[serde(default)]
    pub from_real_time_trade: bool,
    /// The time before the offer expires if it has not been acted on.
    #[serde(with = "ts_seconds")]
    pub expiration_time: ServerTime,
    /// The time this offer was created.
    #[serde(with = "ts_seconds")]
    pub time_created: ServerTime,
    /// The time this offer last had an action e.g. accepting or declining the offer.
    #[serde(with = "ts_seconds")]
    pub time_updated: ServerTime,
    /// The state of this offer.
    pub trade_offer_state: TradeOfferState,
    /// The end date if this trade is in escrow. `None` when this offer is not in escrow.
    #[serde(default, with = "ts_seconds_option_none_when_zero")]
    pub escrow_end_date: Option<ServerTime>,
    /// The confirmation method for this offer.
    #[serde(default)]
    pub confirmation_method: ConfirmationMethod,
}

impl TradeOffer {
    /// The [`SteamID`] of our partner.
    pub fn partner(&self) -> SteamID {
        SteamID::new(
            self.accountid_other,
            steamid_ng::Instance::Desktop,
            steamid_ng::AccountType::Individual,
            steamid_ng::Universe::Public,
        )
    }
}

impl fmt::Display for TradeOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tradeofferid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFER: &str = r#"{
        "tradeofferid": "5436473925",
        "accountid_other": 39734272,
        "message": "",
        "expiration_time": 1672531200,
        "trade_offer_state": 2,
        "items_to_give": [
            {"appid":440,"contextid":"2","assetid":"11292488054","classid":"101785959","instanceid":"11040578","amount":"1","missing":false}
        ],
        "is_our_offer": true,
        "time_created": 1671321600,
        "time_updated": 1671321600,
        "from_real_time_trade": false,
        "escrow_end_date": 0,
        "confirmation_method": 0
    }"#;

    #[test]
    fn deserializes_trade_offer() {
        let offer: TradeOffer = serde_json::from_str(OFFER).unwrap();

        assert_eq!(offer.tradeofferid, 5436473925);
        assert_eq!(offer.trade_offer_state, TradeOfferState::Active);
        assert_eq!(offer.message, None);
        assert_eq!(offer.escrow_end_date, None);
        assert_eq!(offer.tradeid, None);
        assert_eq!(offer.items_to_give.len(), 1);
        assert!(offer.items_to_receive.is_empty());
        assert_eq!(offer.partner().account_id(), 39734272);
    }

    #[test]
    fn fails_on_unknown_state() {
        let body = OFFER.replace(r#""trade_offer_state": 2"#, r#""trade_offer_state": 42"#);
        let error = serde_json::from_str::<TradeOffer>(&body).unwrap_err();

        assert!(error.to_string().contains("Unknown trade offer state code 42"));
    }
}
