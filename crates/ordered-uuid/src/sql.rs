//! Database driver seam.
//!
//! A driver binding hands scanners a [`SqlValue`] read from a row and asks valuers for a
//! [`SqlValue`] to bind as a parameter. [`Scan`] and [`ToSqlValue`] are the two halves of that
//! contract. Both are implemented for [`OrderedUuid`] and for `Option<OrderedUuid>`, where
//! `None` stands for a value that was never constructed (or a SQL `NULL` on the read side).

use crate::{OrderedUuid, OrderedUuidError, OrderedUuidResult};
use chrono::{DateTime, Utc};

/// The value kinds exchanged with a database driver.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Bool(_) => "bool",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Text(_) => "text",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }
}

impl From<[u8; 16]> for SqlValue {
    fn from(bytes: [u8; 16]) -> Self {
        SqlValue::Bytes(bytes.to_vec())
    }
}

/// Populates a value from a column read by the driver.
pub trait Scan {
    /// # Errors
    ///
    /// Returns [`OrderedUuidError::Format`] if `value` cannot be interpreted.
    fn scan(&mut self, value: &SqlValue) -> OrderedUuidResult<()>;
}

/// Produces the parameter a driver binds for a value.
///
/// Takes `&mut self` because encoding can update the value's validity.
pub trait ToSqlValue {
    /// # Errors
    ///
    /// Returns an [`OrderedUuidError`] if no storable value is available.
    fn to_sql_value(&mut self) -> OrderedUuidResult<SqlValue>;
}

impl Scan for OrderedUuid {
    /// Accepts exactly a 16-byte binary value.
    fn scan(&mut self, value: &SqlValue) -> OrderedUuidResult<()> {
        match value {
            SqlValue::Bytes(raw) => self.scan_bytes(raw),
            other => {
                tracing::debug!(kind = other.kind(), "cannot scan ordered uuid from value");
                Err(OrderedUuidError::Format)
            }
        }
    }
}

impl ToSqlValue for OrderedUuid {
    fn to_sql_value(&mut self) -> OrderedUuidResult<SqlValue> {
        self.value().map(SqlValue::from)
    }
}

impl Scan for Option<OrderedUuid> {
    /// `NULL` clears the option; anything else scans into a (possibly new) value.
    ///
    /// On failure the option is left untouched.
    fn scan(&mut self, value: &SqlValue) -> OrderedUuidResult<()> {
        if let SqlValue::Null = value {
            *self = None;
            return Ok(());
        }

        let mut scanned = self.clone().unwrap_or_default();
        scanned.scan(value)?;
        *self = Some(scanned);
        Ok(())
    }
}

impl ToSqlValue for Option<OrderedUuid> {
    /// An absent value has nothing to store and reports [`OrderedUuidError::Invalid`].
    fn to_sql_value(&mut self) -> OrderedUuidResult<SqlValue> {
        match self {
            Some(uuid) => uuid.to_sql_value(),
            None => Err(OrderedUuidError::Invalid),
        }
    }
}
