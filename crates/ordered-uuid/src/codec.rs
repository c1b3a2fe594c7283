//! Text <-> ordered binary conversion.
//!
//! The text side works on the hex digits of a UUID, mirroring the SQL functions commonly used to
//! maintain ordered UUID columns:
//!
//! ```sql
//! -- text -> stored
//! UNHEX(CONCAT(SUBSTR(u, 15, 4), SUBSTR(u, 10, 4), SUBSTR(u, 1, 8),
//!              SUBSTR(u, 20, 4), SUBSTR(u, 25)))
//! -- stored -> text
//! CONCAT(SUBSTR(LCASE(HEX(b)), 9, 8), '-', SUBSTR(LCASE(HEX(b)), 5, 4), '-',
//!        SUBSTR(LCASE(HEX(b)), 1, 4), '-', SUBSTR(LCASE(HEX(b)), 17, 4), '-',
//!        SUBSTR(LCASE(HEX(b)), 21))
//! ```
//!
//! Both directions keep the validity flag on the value they operate on, so conversions take
//! `&mut self`.

use crate::{OrderedUuidError, OrderedUuidResult};
use std::fmt;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

const DASH: char = '-';

/// Number of hex digits in a UUID with the separators removed.
const HEX_LEN: usize = 32;

/// Number of bytes in the stored form.
const ORDERED_LEN: usize = 16;

/// Generates a fresh random UUID in canonical hyphenated form.
pub fn generate() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Returns the ordered storage bytes for `uuid`.
///
/// Agrees byte-for-byte with [`OrderedUuid::value`] on the UUID's canonical text.
pub fn to_ordered_bytes(uuid: &Uuid) -> [u8; ORDERED_LEN] {
    let b = uuid.as_bytes();
    let mut out = [0u8; ORDERED_LEN];
    out[0..2].copy_from_slice(&b[6..8]);
    out[2..4].copy_from_slice(&b[4..6]);
    out[4..8].copy_from_slice(&b[0..4]);
    out[8..].copy_from_slice(&b[8..]);
    out
}

/// Rebuilds a [`Uuid`] from its ordered storage bytes. Inverse of [`to_ordered_bytes`].
pub fn from_ordered_bytes(bytes: [u8; ORDERED_LEN]) -> Uuid {
    let mut b = [0u8; ORDERED_LEN];
    b[0..4].copy_from_slice(&bytes[4..8]);
    b[4..6].copy_from_slice(&bytes[2..4]);
    b[6..8].copy_from_slice(&bytes[0..2]);
    b[8..].copy_from_slice(&bytes[8..]);
    Uuid::from_bytes(b)
}

/// A UUID held as text, convertible to and from the ordered 16-byte storage form.
///
/// The text is kept exactly as supplied. `valid` records whether the last validation or
/// conversion succeeded; an invalid value's text must not be treated as well formed.
///
/// # Construction
/// - [`OrderedUuid::new`] generates a fresh UUID (always valid).
/// - [`OrderedUuid::parse`] wraps arbitrary text and validates it.
/// - [`OrderedUuid::from_bytes`] decodes stored bytes.
/// - [`OrderedUuid::default`] is the empty, never-constructed value. It is not valid and
///   [`OrderedUuid::value`] on it returns [`OrderedUuidError::Invalid`].
///
/// # Validation
/// Validation only checks that the text has 32 characters once dashes are removed. Hex digits
/// are checked later, when [`OrderedUuid::value`] decodes them, so a 32-character non-hex string
/// is marked valid by [`OrderedUuid::parse`] and still fails to encode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrderedUuid {
    text: String,
    valid: bool,
}

impl OrderedUuid {
    /// Generates a new valid UUID.
    pub fn new() -> Self {
        Self {
            text: generate(),
            valid: true,
        }
    }

    /// Wraps `input` and validates it.
    ///
    /// Never fails: the outcome is reported by [`OrderedUuid::is_valid`], and the original
    /// input is retained either way.
    pub fn parse(input: impl Into<String>) -> Self {
        let mut ordered = Self {
            text: input.into(),
            valid: false,
        };
        ordered.ordered_hex();
        ordered
    }

    /// Decodes ordered storage bytes into a valid value with canonical lowercase text.
    pub fn from_bytes(bytes: [u8; ORDERED_LEN]) -> Self {
        Self::from(from_ordered_bytes(bytes))
    }

    /// Returns the held text verbatim. No validation is performed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the last validation or conversion succeeded.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Interprets the held text as a [`Uuid`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderedUuidError::Format`] if the text is not a parseable UUID.
    pub fn to_uuid(&self) -> OrderedUuidResult<Uuid> {
        Uuid::parse_str(&self.text).map_err(|err| {
            tracing::debug!(%err, "held text is not a parseable uuid");
            OrderedUuidError::Format
        })
    }

    /// Encodes the held text into the ordered 16-byte storage form.
    ///
    /// May mark the value valid as a side effect, see the type-level docs.
    ///
    /// # Errors
    ///
    /// - [`OrderedUuidError::Invalid`] if the text is not 32 characters once dashes are removed
    ///   (this includes the empty default value).
    /// - [`OrderedUuidError::Format`] if those 32 characters are not all hex digits.
    pub fn value(&mut self) -> OrderedUuidResult<[u8; ORDERED_LEN]> {
        let h = self.ordered_hex();
        if h.len() != HEX_LEN {
            return Err(OrderedUuidError::Invalid);
        }

        let mut dst = [0u8; ORDERED_LEN];
        hex::decode_to_slice(&h, &mut dst).map_err(|err| {
            tracing::debug!(%err, "ordered uuid text is not hex");
            OrderedUuidError::Format
        })?;

        Ok(dst)
    }

    /// Decodes ordered storage bytes into this value.
    ///
    /// On success the text is replaced with the canonical lowercase form and the value is marked
    /// valid. On failure the value is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedUuidError::Format`] if `raw` is not exactly 16 bytes.
    pub fn scan_bytes(&mut self, raw: &[u8]) -> OrderedUuidResult<()> {
        if raw.len() != ORDERED_LEN {
            tracing::debug!(len = raw.len(), "rejecting ordered uuid with wrong byte length");
            return Err(OrderedUuidError::Format);
        }

        self.format_uuid(&hex::encode(raw))
    }

    /// Rebuilds canonical text from the hex digits of the ordered form.
    fn format_uuid(&mut self, h: &str) -> OrderedUuidResult<()> {
        let h = h.to_ascii_lowercase();

        // Slicing below is by byte offset.
        if h.len() != HEX_LEN || !h.is_ascii() {
            return Err(OrderedUuidError::Format);
        }

        self.text = format!(
            "{}-{}-{}-{}-{}",
            &h[8..16],
            &h[4..8],
            &h[0..4],
            &h[16..20],
            &h[20..]
        );
        self.valid = true;
        Ok(())
    }

    /// Returns the uppercase hex digits of the ordered form.
    ///
    /// Text that is not 32 characters after stripping is returned stripped and uppercased but
    /// not reordered, and the value is not marked valid.
    fn ordered_hex(&mut self) -> Vec<u8> {
        let h = self.strip_dash().to_uppercase().into_bytes();

        if h.len() != HEX_LEN {
            return h;
        }

        let mut buf = Vec::with_capacity(HEX_LEN);
        buf.extend_from_slice(&h[12..16]);
        buf.extend_from_slice(&h[8..12]);
        buf.extend_from_slice(&h[0..8]);
        buf.extend_from_slice(&h[16..20]);
        buf.extend_from_slice(&h[20..]);

        self.valid = true;
        buf
    }

    fn strip_dash(&self) -> String {
        self.text.replace(DASH, "")
    }
}

impl From<Uuid> for OrderedUuid {
    fn from(uuid: Uuid) -> Self {
        Self {
            text: uuid.hyphenated().to_string(),
            valid: true,
        }
    }
}

impl From<&str> for OrderedUuid {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for OrderedUuid {
    fn from(input: String) -> Self {
        Self::parse(input)
    }
}

impl AsRef<str> for OrderedUuid {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for OrderedUuid {
    /// Writes the held text verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
