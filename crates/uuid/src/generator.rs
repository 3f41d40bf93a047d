//! Random (version 4) UUID generation.
//!
//! The random source is a capability handed to a [`Generator`] rather than process-wide
//! state. Production code uses the operating system generator ([`OsEntropy`]); tests can
//! plug in a seeded RNG or any [`std::io::Read`] to get deterministic output.
//!
//! Generation reads exactly 16 bytes and then stamps the RFC 4122 variant bits into byte 8
//! and the version nibble into byte 6.

use crate::{Uuid, UuidError, UuidResult, UUID_LEN};
use rand::rngs::OsRng;
use rand::RngCore;
use std::io::{self, Read};

/// Number of attempts [`must_new_v4`] makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// A source of random bytes.
pub trait EntropySource {
    /// Fills as much of `dest` as the source can and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns the source's own error if it could not produce data at all.
    fn fill(&mut self, dest: &mut [u8]) -> Result<usize, rand::Error>;
}

/// Adapts any [`RngCore`] into an [`EntropySource`].
///
/// RNGs either fill the whole buffer or fail, so a successful call always reports the full
/// length.
#[derive(Clone, Debug, Default)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> EntropySource for RngSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<usize, rand::Error> {
        self.0.try_fill_bytes(dest)?;
        Ok(dest.len())
    }
}

/// The operating system's cryptographically secure generator.
pub type OsEntropy = RngSource<OsRng>;

/// Adapts a [`Read`] into an [`EntropySource`].
///
/// Reads until the buffer is full or the reader reports end of input, so a short reader
/// yields a short count instead of an error.
#[derive(Debug)]
pub struct ReadSource<R>(pub R);

impl<R: Read> EntropySource for ReadSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<usize, rand::Error> {
        let mut filled = 0;
        while filled < dest.len() {
            match self.0.read(&mut dest[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(rand::Error::new(e)),
            }
        }
        Ok(filled)
    }
}

/// Produces version 4 UUIDs from an injected [`EntropySource`].
///
/// Each call to [`Generator::generate`] makes exactly one read from the source.
/// [`Generator::generate_with_retry`] and [`Generator::must_generate`] retry up to
/// [`Generator::max_attempts`] times.
#[derive(Debug)]
pub struct Generator<S> {
    source: S,
    max_attempts: u32,
}

impl Generator<OsEntropy> {
    /// Creates a generator backed by the operating system RNG.
    pub fn os() -> Self {
        Self::new(RngSource(OsRng))
    }
}

impl Default for Generator<OsEntropy> {
    fn default() -> Self {
        Self::os()
    }
}

impl<S: EntropySource> Generator<S> {
    /// Creates a generator reading from `source`, with [`DEFAULT_MAX_ATTEMPTS`] retries.
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the retry budget. Values below one are raised to one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the retry budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generates one UUID with a single read from the source.
    ///
    /// # Errors
    ///
    /// - [`UuidError::SourceError`] if the source fails.
    /// - [`UuidError::InsufficientEntropy`] if it delivers fewer than 16 bytes.
    pub fn generate(&mut self) -> UuidResult<Uuid> {
        let mut bytes = [0u8; UUID_LEN];

        let read = self
            .source
            .fill(&mut bytes)
            .map_err(UuidError::SourceError)?;
        if read != UUID_LEN {
            return Err(UuidError::InsufficientEntropy {
                expected: UUID_LEN,
                read,
            });
        }

        // RFC 4122 section 4.1.1: variant 10xx
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        // RFC 4122 section 4.1.3: version 4 (random)
        bytes[6] = (bytes[6] & 0x0f) | 0x40;

        Ok(Uuid::from_array(bytes))
    }

    /// Generates a UUID, retrying failed reads up to the retry budget.
    ///
    /// # Errors
    ///
    /// Returns the error from the last attempt once every attempt has failed.
    pub fn generate_with_retry(&mut self) -> UuidResult<Uuid> {
        let mut attempt = 1;
        loop {
            match self.generate() {
                Ok(id) => return Ok(id),
                Err(e) if attempt >= self.max_attempts => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        "UUID generation attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        e
                    );
                    attempt += 1;
                }
            }
        }
    }

    /// Generates a UUID, treating source failure as unrecoverable.
    ///
    /// # Panics
    ///
    /// Panics if every attempt in the retry budget fails. A working OS generator does not
    /// fail, so this only fires when the platform's entropy source is broken.
    pub fn must_generate(&mut self) -> Uuid {
        match self.generate_with_retry() {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    "UUID generation failed after {} attempts: {}",
                    self.max_attempts,
                    e
                );
                panic!(
                    "UUID generation failed after {} attempts: {}",
                    self.max_attempts, e
                )
            }
        }
    }
}

/// Generates a random version 4 UUID from the operating system RNG.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn new_v4() -> UuidResult<Uuid> {
    Generator::os().generate()
}

/// Generates a random version 4 UUID, retrying up to [`DEFAULT_MAX_ATTEMPTS`] times.
///
/// # Panics
///
/// Panics if the operating system RNG fails on every attempt.
pub fn must_new_v4() -> Uuid {
    Generator::os().must_generate()
}
