//! Codec configuration.
//!
//! Configuration is resolved once at process startup and passed into the codec. The library
//! never reads environment variables itself; binaries look up [`SCAN_MODE_ENV`] and
//! [`MAX_GENERATE_ATTEMPTS_ENV`] and hand the raw values to the `*_from_env_value` helpers.

use crate::generator::{EntropySource, Generator, DEFAULT_MAX_ATTEMPTS};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Environment variable conventionally holding the [`ScanMode`].
pub const SCAN_MODE_ENV: &str = "UUID_SCAN_MODE";

/// Environment variable conventionally holding the generation retry budget.
pub const MAX_GENERATE_ATTEMPTS_ENV: &str = "UUID_MAX_GENERATE_ATTEMPTS";

/// What a storage scan does with a value that is not a byte sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Reset the receiver to the nil UUID and report success.
    #[default]
    Lenient,
    /// Report [`UuidError::TypeMismatch`] and leave the receiver alone.
    Strict,
}

impl FromStr for ScanMode {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ScanMode::Lenient),
            "strict" => Ok(ScanMode::Strict),
            other => Err(UuidError::InvalidConfig(format!(
                "unknown scan mode '{}', expected 'lenient' or 'strict'",
                other
            ))),
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Lenient => f.write_str("lenient"),
            ScanMode::Strict => f.write_str("strict"),
        }
    }
}

/// Codec configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    scan_mode: ScanMode,
    max_generate_attempts: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::default(),
            max_generate_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CodecConfig {
    /// Create a new `CodecConfig`.
    pub fn new(scan_mode: ScanMode, max_generate_attempts: u32) -> UuidResult<Self> {
        if max_generate_attempts == 0 {
            return Err(UuidError::InvalidConfig(
                "max_generate_attempts must be at least 1".into(),
            ));
        }

        Ok(Self {
            scan_mode,
            max_generate_attempts,
        })
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    pub fn max_generate_attempts(&self) -> u32 {
        self.max_generate_attempts
    }

    /// Builds a [`Generator`] over `source` with the configured retry budget.
    pub fn generator<S: EntropySource>(&self, source: S) -> Generator<S> {
        Generator::new(source).with_max_attempts(self.max_generate_attempts)
    }
}

/// Parse the scan mode from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`ScanMode::Lenient`].
pub fn scan_mode_from_env_value(value: Option<String>) -> UuidResult<ScanMode> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<ScanMode>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the generation retry budget from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_ATTEMPTS`]. Zero and
/// non-numeric values are rejected.
pub fn max_attempts_from_env_value(value: Option<String>) -> UuidResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_MAX_ATTEMPTS);
    };

    match value.parse::<u32>() {
        Ok(0) => Err(UuidError::InvalidConfig(format!(
            "{} must be at least 1",
            MAX_GENERATE_ATTEMPTS_ENV
        ))),
        Ok(n) => Ok(n),
        Err(e) => Err(UuidError::InvalidConfig(format!(
            "{} must be a positive integer, got '{}': {}",
            MAX_GENERATE_ATTEMPTS_ENV, value, e
        ))),
    }
}
