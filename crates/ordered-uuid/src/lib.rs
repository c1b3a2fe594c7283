//! Ordered UUID storage codec.
//!
//! Random and time-based UUIDs make poor clustered primary keys when stored in their standard
//! byte order: consecutive identifiers scatter across the index. This crate stores a UUID as 16
//! bytes with the `time_hi_and_version` field moved to the front, so identifiers generated close
//! together also sort close together.
//!
//! ## Layouts
//!
//! Standard (RFC 4122) field order:
//!
//! ```text
//! time_low(4) | time_mid(2) | time_hi_and_version(2) | clock_seq(2) | node(6)
//! ```
//!
//! Ordered (storage) field order:
//!
//! ```text
//! time_hi_and_version(2) | time_mid(2) | time_low(4) | clock_seq(2) | node(6)
//! ```
//!
//! Example:
//! - Text: `c5cd73e6-b074-48ac-85f3-e55fbd199a31`
//! - Stored: `48ACB074C5CD73E685F3E55FBD199A31` (hex of the 16 stored bytes)
//!
//! ## Usage
//!
//! ```
//! use ordered_uuid::{OrderedUuid, Scan, SqlValue};
//!
//! # fn main() -> Result<(), ordered_uuid::OrderedUuidError> {
//! let mut id = OrderedUuid::parse("c5cd73e6-b074-48ac-85f3-e55fbd199a31");
//! let stored = id.value()?;
//!
//! let mut read_back = OrderedUuid::default();
//! read_back.scan(&SqlValue::Bytes(stored.to_vec()))?;
//! assert_eq!(read_back.text(), "c5cd73e6-b074-48ac-85f3-e55fbd199a31");
//! # Ok(())
//! # }
//! ```
//!
//! Only byte order and hex encoding are handled here. Version and variant bits are never
//! inspected.

mod codec;
#[cfg(feature = "serde")]
pub mod serialization;
mod sql;

// Re-export public types
pub use codec::{from_ordered_bytes, generate, to_ordered_bytes, OrderedUuid, Uuid};
pub use sql::{Scan, SqlValue, ToSqlValue};

/// Error type for ordered UUID conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderedUuidError {
    /// The supplied value cannot be interpreted as an ordered UUID.
    #[error("ordereduuid: cannot convert type")]
    Format,

    /// No well-formed UUID is available to serialise.
    #[error("ordereduuid: invalid uuid value")]
    Invalid,
}

/// Result type for ordered UUID conversions.
pub type OrderedUuidResult<T> = Result<T, OrderedUuidError>;
