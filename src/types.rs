//! Types for common values in Steam responses.

use chrono::{DateTime, Utc};

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An amount for stackable items. For non-stackable items this is simply `1`.
pub type Amount = u32;
/// An ID for the class of an item which provides a general overview of an item.
pub type ClassId = u64;
/// A more specific instance of a class, for example a Team Fortress 2 item which is painted.
pub type InstanceId = Option<u64>;
/// An ID of a trade offer.
pub type TradeOfferId = u64;
/// An ID of a trade.
pub type TradeId = u64;
/// A time from Steam's servers.
pub type ServerTime = DateTime<Utc>;
