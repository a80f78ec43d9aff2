use crate::error::UnknownTradeOfferStateError;
use num_enum::IntoPrimitive;
use serde::{Deserialize, Deserializer};
use serde::de;
use serde_repr::Serialize_repr;
use strum_macros::{Display, EnumString};

/// The state of a trade offer.
///
/// Decoding a code outside of the known set fails rather than falling back to a default state.
#[derive(Serialize_repr, Display, EnumString, Debug, PartialEq, Eq, Hash, IntoPrimitive, Clone, Copy)]
#[repr(u8)]
pub enum TradeOfferState {
    /// Invalid.
    Invalid = 1,
    /// This trade offer has been sent, neither party has acted on it yet.
    Active = 2,
    /// The trade offer was accepted by the recipient and items were exchanged.
    Accepted = 3,
    /// The recipient made a counter offer.
    Countered = 4,
    /// The trade offer was not accepted before the expiration date.
    Expired = 5,
    /// The sender cancelled the offer.
    Canceled = 6,
    /// The recipient declined the offer.
    Declined = 7,
    /// Some of the items in the offer are no longer available.
    InvalidItems = 8,
    /// The offer hasn't been sent yet and is awaiting email or mobile confirmation.
    CreatedNeedsConfirmation = 9,
    /// Either party canceled the offer via email or mobile confirmation.
    CanceledBySecondFactor = 10,
    /// The trade has been placed on hold.
    InEscrow = 11,
}

impl TradeOfferState {
    /// Maps a numeric state code to a [`TradeOfferState`].
    pub fn from_code(code: i64) -> Result<Self, UnknownTradeOfferStateError> {
        match code {
            1 => Ok(Self::Invalid),
            2 => Ok(Self::Active),
            3 => Ok(Self::Accepted),
            4 => Ok(Self::Countered),
            5 => Ok(Self::Expired),
            6 => Ok(Self::Canceled),
            7 => Ok(Self::Declined),
            8 => Ok(Self::InvalidItems),
            9 => Ok(Self::CreatedNeedsConfirmation),
            10 => Ok(Self::CanceledBySecondFactor),
            11 => Ok(Self::InEscrow),
            _ => Err(UnknownTradeOfferStateError(code)),
        }
    }

    /// The numeric code for this state.
    pub fn code(&self) -> u8 {
        (*self).into()
    }

    /// Whether the offer can still be acted on.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active | Self::CreatedNeedsConfirmation)
    }
}

impl TryFrom<i64> for TradeOfferState {
    type Error = UnknownTradeOfferStateError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl<'de> Deserialize<'de> for TradeOfferState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;

        Self::from_code(code).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(TradeOfferState::from_code(2), Ok(TradeOfferState::Active));
        assert_eq!(TradeOfferState::from_code(3), Ok(TradeOfferState::Accepted));
        assert_eq!(TradeOfferState::from_code(11), Ok(TradeOfferState::InEscrow));
        assert_eq!(TradeOfferState::InEscrow.code(), 11);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(TradeOfferState::from_code(0), Err(UnknownTradeOfferStateError(0)));
        assert_eq!(TradeOfferState::from_code(12), Err(UnknownTradeOfferStateError(12)));
        assert!(TradeOfferState::try_from(-3).is_err());
    }

    #[test]
    fn deserializes_known_state() {
        let state: TradeOfferState = serde_json::from_str("2").unwrap();

        assert_eq!(state, TradeOfferState::Active);
        assert_eq!(state.to_string(), "Active");
    }

    #[test]
    fn deserializing_unknown_state_names_the_code() {
        let error = serde_json::from_str::<TradeOfferState>("99").unwrap_err();

        assert!(error.to_string().contains("Unknown trade offer state code 99"));
    }

    #[test]
    fn parses_state_names() {
        assert_eq!("InEscrow".parse::<TradeOfferState>(), Ok(TradeOfferState::InEscrow));
        assert_eq!("Pending".parse::<TradeOfferState>(), Err(strum::ParseError::VariantNotFound));
    }
}
