use num_enum::{TryFromPrimitive, IntoPrimitive};
use serde_repr::{Serialize_repr, Deserialize_repr};
use strum_macros::{Display, EnumString};

/// The method of confirmation for a trade offer.
#[derive(Serialize_repr, Deserialize_repr, Display, EnumString, Debug, Default, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[repr(u8)]
pub enum ConfirmationMethod {
    #[default]
    None = 0,
    Email = 1,
    MobileApp = 2,
}
