//! RFC 4122 version 4 UUIDs.
//!
//! This crate provides a small, fixed-size [`Uuid`] value type together with the codec around
//! it: random generation, permissive text parsing, canonical and raw formatting, byte
//! conversion, and adapters for JSON and database drivers.
//!
//! ## Text forms
//! - Canonical: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (36 lowercase hex characters and hyphens)
//! - Raw: `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx` (32 lowercase hex characters)
//!
//! Parsing accepts either form, in any case, optionally wrapped in one pair of double quotes so
//! that JSON-quoted input can be passed straight through.
//!
//! ## Binary form
//! Exactly 16 bytes, stored and emitted in the order received (RFC 4122 network order).
//!
//! ## The nil UUID
//! The all-zero value ([`Uuid::NIL`]) stands for "no identifier". The `*_optional` helpers
//! return it instead of an error, so callers that must tell "absent" apart from "invalid"
//! should use the fallible variants.
//!
//! ## Example
//!
//! ```
//! use uuid_codec::parse;
//!
//! # fn main() -> Result<(), uuid_codec::UuidError> {
//! let id = parse("550e8400-e29b-41d4-a716-446655440000")?;
//! assert_eq!(id.raw_string(), "550e8400e29b41d4a716446655440000");
//! assert_eq!(parse(&id.raw_string())?, id);
//! assert!(!id.is_zero());
//! # Ok(())
//! # }
//! ```

mod config;
mod generator;
mod json;
mod parse;
mod storage;
mod value;

// Re-export public types
pub use config::{
    max_attempts_from_env_value, scan_mode_from_env_value, CodecConfig, ScanMode,
    MAX_GENERATE_ATTEMPTS_ENV, SCAN_MODE_ENV,
};
pub use generator::{
    must_new_v4, new_v4, EntropySource, Generator, OsEntropy, ReadSource, RngSource,
    DEFAULT_MAX_ATTEMPTS,
};
pub use parse::{parse, parse_optional};
pub use storage::{Scanner, StorageValue, Valuer};
pub use value::{equal, from_bytes, from_bytes_optional, Uuid, UUID_LEN};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// The random source delivered fewer bytes than a UUID needs.
    #[error("insufficient random data (expected: {expected}, read: {read})")]
    InsufficientEntropy { expected: usize, read: usize },

    /// The random source itself failed.
    #[error("random source failed: {0}")]
    SourceError(#[source] rand::Error),

    /// Input text is neither 32 nor 36 characters long once quotes are stripped.
    #[error("unknown UUID string {input}")]
    UnrecognizedFormat { input: String },

    /// A hex group could not be decoded.
    #[error("invalid hex digit in UUID: {0}")]
    InvalidHexDigit(#[from] hex::FromHexError),

    /// Binary input is not exactly 16 bytes.
    #[error("invalid UUID length (expected: {expected}, actual: {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// A storage value of an unsupported kind was scanned in strict mode.
    #[error("unexpected storage value of type {found} for UUID")]
    TypeMismatch { found: &'static str },

    /// Configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
