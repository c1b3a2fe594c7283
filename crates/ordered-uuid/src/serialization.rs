//! Serde support.
//!
//! [`OrderedUuid`] serialises as its text. Deserialising requires text that passes validation.
//!
//! [`ordered_bytes`] stores a plain [`Uuid`] field in the ordered 16-byte layout:
//!
//! ```
//! use ordered_uuid::Uuid;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Row {
//!     #[serde(with = "ordered_uuid::serialization::ordered_bytes")]
//!     id: Uuid,
//! }
//! ```

use crate::{OrderedUuid, Uuid};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for OrderedUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.text())
    }
}

impl<'de> Deserialize<'de> for OrderedUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let uuid = OrderedUuid::parse(s);
        if !uuid.is_valid() {
            return Err(serde::de::Error::custom(crate::OrderedUuidError::Invalid));
        }
        Ok(uuid)
    }
}

/// `#[serde(with = "...")]` helpers storing a [`Uuid`] as its ordered bytes.
pub mod ordered_bytes {
    use super::*;

    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::to_ordered_bytes(uuid).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: [u8; 16] = Deserialize::deserialize(deserializer)?;
        Ok(crate::from_ordered_bytes(bytes))
    }
}
