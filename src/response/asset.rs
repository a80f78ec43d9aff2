use serde::{Serialize, Deserialize};
use crate::serialize::{string, option_string_0_as_none};
use crate::types::{AppId, ContextId, AssetId, Amount, ClassId, InstanceId};

/// An item belonging to a [`TradeOffer`][`super::TradeOffer`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Asset {
    /// The app ID e.g. 440 for Team Fortress 2 or 730 for Counter-Strike Global offensive.
    pub appid: AppId,
    /// The context ID.
    #[serde(with = "string")]
    pub contextid: ContextId,
    /// The unique asset ID. This value is unique to the item's `appid` and `contextid`.
    #[serde(with = "string")]
    pub assetid: AssetId,
    /// The ID of the classinfo.
    #[serde(with = "string")]
    pub classid: ClassId,
    /// The specific instance ID of the classinfo belonging to the class ID.
    #[serde(default, with = "option_string_0_as_none")]
    pub instanceid: InstanceId,
    /// The amount. If this item is not stackable the amount will be `1`.
    #[serde(with = "string")]
    pub amount: Amount,
    /// Whether the item is no longer in the owner's inventory.
    #[serde(default)]
    pub missing: bool,
}
