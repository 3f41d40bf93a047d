//! Text parsing.
//!
//! Two layouts are understood:
//! - `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (36 characters)
//! - `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx` (32 characters)
//!
//! Parsing is deliberately permissive. Hex digits may be upper or lower case, the separator
//! positions are not inspected, and the version and variant bits are left as found so legacy
//! identifiers survive a round trip.

use crate::{Uuid, UuidError, UuidResult, UUID_LEN};

/// Byte offsets of the five hex groups in the canonical layout, paired with the UUID byte
/// range each one fills.
const CANONICAL_GROUPS: [((usize, usize), (usize, usize)); 5] = [
    ((0, 8), (0, 4)),
    ((9, 13), (4, 6)),
    ((14, 18), (6, 8)),
    ((19, 23), (8, 10)),
    ((24, 36), (10, 16)),
];

/// Removes one pair of surrounding double quotes, if present.
fn strip_quotes(text: &[u8]) -> &[u8] {
    match text {
        [b'"', inner @ .., b'"'] => inner,
        _ => text,
    }
}

/// Parses a UUID from canonical or raw hex text.
///
/// A single pair of surrounding double quotes is stripped first, so the output of
/// [`Uuid::marshal_json`] can be fed back in unchanged.
///
/// # Errors
///
/// - [`UuidError::UnrecognizedFormat`] if the text is neither 36 nor 32 characters long.
/// - [`UuidError::InvalidHexDigit`] if any group is not valid hex. No partially decoded
///   value is ever returned.
pub fn parse(s: &str) -> UuidResult<Uuid> {
    parse_bytes(s.as_bytes())
}

/// Byte-level form of [`parse`], for input that may not be valid UTF-8.
///
/// Length dispatch and hex decoding work on the raw bytes; the text is only decoded
/// (lossily) to name it in an [`UuidError::UnrecognizedFormat`] error.
pub(crate) fn parse_bytes(text: &[u8]) -> UuidResult<Uuid> {
    let text = strip_quotes(text);
    let mut bytes = [0u8; UUID_LEN];

    match text.len() {
        36 => {
            for ((from, to), (start, end)) in CANONICAL_GROUPS {
                hex::decode_to_slice(&text[from..to], &mut bytes[start..end])?;
            }
        }
        32 => hex::decode_to_slice(text, &mut bytes)?,
        _ => {
            return Err(UuidError::UnrecognizedFormat {
                input: String::from_utf8_lossy(text).into_owned(),
            })
        }
    }

    Ok(Uuid::from_array(bytes))
}

/// Same as [`parse`], but returns [`Uuid::NIL`] on any error.
pub fn parse_optional(s: &str) -> Uuid {
    parse(s).unwrap_or_default()
}
