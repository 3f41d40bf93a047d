//! Database driver adapters.
//!
//! Drivers exchange column values as a small set of primitive kinds, modelled here by
//! [`StorageValue`]. A UUID is always written as its 16 raw bytes ([`Valuer`]) but is read back
//! from whatever the column happens to hold ([`Scanner`]):
//!
//! | inbound value            | result                                   |
//! |--------------------------|------------------------------------------|
//! | 16 bytes                 | taken as the raw UUID                    |
//! | 32 bytes                 | hex-decoded into 16 bytes                |
//! | any other byte length    | parsed as text, see [`crate::parse`]      |
//! | not bytes (lenient mode) | receiver reset to [`Uuid::NIL`], no error |
//! | not bytes (strict mode)  | [`UuidError::TypeMismatch`]               |
//!
//! A failed scan never modifies the receiver.

use crate::config::ScanMode;
use crate::parse::parse_bytes;
use crate::{from_bytes, Uuid, UuidError, UuidResult, UUID_LEN};

/// A column value as seen by a database driver.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
}

impl StorageValue {
    /// Name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Bool(_) => "bool",
            StorageValue::Bytes(_) => "bytes",
            StorageValue::Text(_) => "text",
        }
    }
}

/// Converts a value into the form a driver persists.
pub trait Valuer {
    fn value(&self) -> StorageValue;
}

/// Populates a value in place from what a driver read back.
pub trait Scanner {
    /// # Errors
    ///
    /// Returns an error if `src` holds data that cannot be converted.
    fn scan(&mut self, src: &StorageValue) -> UuidResult<()>;
}

/// Decodes a byte column: 16 raw bytes, 32 ASCII hex digits, or anything
/// [`crate::parse`] accepts.
pub(crate) fn from_byte_value(data: &[u8]) -> UuidResult<Uuid> {
    match data.len() {
        UUID_LEN => from_bytes(data),
        32 => {
            let mut bytes = [0u8; UUID_LEN];
            hex::decode_to_slice(data, &mut bytes)?;
            from_bytes(&bytes)
        }
        _ => parse_bytes(data),
    }
}

impl Uuid {
    /// Scans `src` into the receiver using the given mismatch policy.
    ///
    /// # Errors
    ///
    /// - [`UuidError::InvalidHexDigit`] for a 32-byte value that is not hex.
    /// - Any [`crate::parse`] error for byte values of other lengths.
    /// - [`UuidError::TypeMismatch`] for non-byte values in [`ScanMode::Strict`].
    pub fn scan_with(&mut self, src: &StorageValue, mode: ScanMode) -> UuidResult<()> {
        let StorageValue::Bytes(data) = src else {
            return match mode {
                ScanMode::Lenient => {
                    tracing::debug!("scanning {} value into UUID, resetting to nil", src.kind());
                    self.set(Uuid::NIL);
                    Ok(())
                }
                ScanMode::Strict => Err(UuidError::TypeMismatch { found: src.kind() }),
            };
        };

        let id = from_byte_value(data)?;
        self.set(id);
        Ok(())
    }
}

impl Valuer for Uuid {
    /// Returns the 16 raw bytes.
    fn value(&self) -> StorageValue {
        StorageValue::Bytes(self.as_bytes().to_vec())
    }
}

impl Scanner for Uuid {
    /// Scans with [`ScanMode::Lenient`].
    fn scan(&mut self, src: &StorageValue) -> UuidResult<()> {
        self.scan_with(src, ScanMode::Lenient)
    }
}

impl From<Uuid> for StorageValue {
    fn from(id: Uuid) -> Self {
        id.value()
    }
}
