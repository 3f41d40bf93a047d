//! The [`Uuid`] value type, byte conversion, equality and text formatting.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Number of bytes in a UUID.
pub const UUID_LEN: usize = 16;

/// A 128-bit UUID stored as 16 bytes in RFC 4122 order.
///
/// `Uuid` is a plain value: it is `Copy`, compares byte-wise and carries no other state.
/// The length is fixed by the type, so there is no way to hold a UUID of the wrong size.
///
/// # Construction
/// - [`crate::new_v4`] or a [`crate::Generator`] for fresh random identifiers.
/// - [`crate::parse`] for canonical or raw hex text.
/// - [`from_bytes`] for a byte slice of unknown length.
/// - [`Uuid::from_array`] when the 16 bytes are already at hand.
///
/// # Display format
/// `Display` produces the canonical hyphenated form. Use [`Uuid::raw_string`] for the
/// 32-character form without hyphens.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    /// The all-zero UUID, used as the "no identifier" sentinel.
    pub const NIL: Self = Self([0u8; UUID_LEN]);

    /// Wraps 16 bytes without any validation.
    pub const fn from_array(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    /// Consumes the UUID and returns its bytes.
    pub const fn into_bytes(self) -> [u8; UUID_LEN] {
        self.0
    }

    /// Returns true if every byte is zero.
    pub fn is_zero(&self) -> bool {
        equal(self, &Self::NIL)
    }

    /// Returns the version number stored in the high nibble of byte 6.
    ///
    /// Parsed values are not validated, so this can be any value from 0 to 15.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns true if the variant bits of byte 8 are `10` (RFC 4122).
    pub const fn is_rfc4122_variant(&self) -> bool {
        self.0[8] & 0xc0 == 0x80
    }

    /// Formats the UUID as 32 lowercase hex characters with no separators.
    pub fn raw_string(&self) -> String {
        hex::encode(self.0)
    }

    /// Formats the UUID in canonical `8-4-4-4-12` form.
    fn canonical(&self) -> String {
        let b = &self.0;
        let mut out = String::with_capacity(36);
        out.push_str(&hex::encode(&b[0..4]));
        out.push('-');
        out.push_str(&hex::encode(&b[4..6]));
        out.push('-');
        out.push_str(&hex::encode(&b[6..8]));
        out.push('-');
        out.push_str(&hex::encode(&b[8..10]));
        out.push('-');
        out.push_str(&hex::encode(&b[10..16]));
        out
    }

    /// Overwrites the receiver in place.
    pub(crate) fn set(&mut self, other: Uuid) {
        self.0 = other.0;
    }
}

/// Compares two UUIDs byte by byte.
pub fn equal(a: &Uuid, b: &Uuid) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| x == y)
}

/// Converts a byte slice into a [`Uuid`].
///
/// # Errors
///
/// Returns [`UuidError::InvalidLength`] unless `data` is exactly 16 bytes long.
pub fn from_bytes(data: &[u8]) -> UuidResult<Uuid> {
    let bytes: [u8; UUID_LEN] = data.try_into().map_err(|_| UuidError::InvalidLength {
        expected: UUID_LEN,
        actual: data.len(),
    })?;
    Ok(Uuid(bytes))
}

/// Same as [`from_bytes`], but returns [`Uuid::NIL`] when the length is wrong.
pub fn from_bytes_optional(data: &[u8]) -> Uuid {
    from_bytes(data).unwrap_or_default()
}

impl fmt::Display for Uuid {
    /// Formats the UUID in canonical hyphenated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.canonical())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.canonical())
    }
}

impl fmt::LowerHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw_string())
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses canonical or raw text, see [`crate::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(id: Uuid) -> Self {
        id.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        from_bytes(data)
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(id: ::uuid::Uuid) -> Self {
        Self(id.into_bytes())
    }
}

impl From<Uuid> for ::uuid::Uuid {
    fn from(id: Uuid) -> Self {
        ::uuid::Uuid::from_bytes(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];

    #[test]
    fn test_display_is_canonical() {
        let id = Uuid::from_array(SAMPLE);
        let canonical = id.to_string();

        assert_eq!(canonical, "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(canonical.len(), 36);
    }

    #[test]
    fn test_raw_string_has_no_hyphens() {
        let id = Uuid::from_array(SAMPLE);
        let raw = id.raw_string();

        assert_eq!(raw, "550e8400e29b41d4a716446655440000");
        assert_eq!(raw.len(), 32);
        assert_eq!(format!("{:x}", id), raw);
    }

    #[test]
    fn test_formatting_is_lowercase() {
        let id = Uuid::from_array([0xab; 16]);

        assert_eq!(id.to_string(), "abababab-abab-abab-abab-abababababab");
        assert_eq!(id.raw_string(), "abababababababababababababababab");
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let id = Uuid::from_array(SAMPLE);

        assert_eq!(id.to_string(), id.to_string());
        assert_eq!(id.raw_string(), id.raw_string());
    }

    #[test]
    fn test_nil_formats_as_zeros() {
        assert_eq!(
            Uuid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    #[test]
    fn test_display_honours_width_and_fill() {
        let padded = format!("{:>40}|", Uuid::NIL);
        assert_eq!(padded.len(), 41);
        assert!(padded.starts_with("    0000"));

        let filled = format!("{:*<34x}", Uuid::from_array(SAMPLE));
        assert_eq!(filled, "550e8400e29b41d4a716446655440000**");
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", Uuid::from_array(SAMPLE));

        assert_eq!(debug, "Uuid(550e8400-e29b-41d4-a716-446655440000)");
    }

    #[test]
    fn test_is_zero() {
        assert!(Uuid::NIL.is_zero());

        for i in 0..UUID_LEN {
            let mut bytes = [0u8; UUID_LEN];
            bytes[i] = 1;
            assert!(!Uuid::from_array(bytes).is_zero());
        }
    }

    #[test]
    fn test_equal_is_reflexive_and_symmetric() {
        let a = Uuid::from_array(SAMPLE);
        let b = Uuid::from_array([0x11; 16]);

        assert!(equal(&a, &a));
        assert!(!equal(&a, &b));
        assert_eq!(equal(&a, &b), equal(&b, &a));
        assert_eq!(equal(&a, &b), a == b);
    }

    #[test]
    fn test_equal_detects_last_byte_difference() {
        let mut other = SAMPLE;
        other[15] ^= 0xff;

        assert!(!equal(&Uuid::from_array(SAMPLE), &Uuid::from_array(other)));
    }

    #[test]
    fn test_from_bytes_exact_length() {
        let id = from_bytes(&SAMPLE).unwrap();

        assert_eq!(id.as_bytes(), &SAMPLE);
        assert_eq!(from_bytes(id.as_bytes()).unwrap(), id);
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        let result = from_bytes(&SAMPLE[..15]);

        match result {
            Err(UuidError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            _ => panic!("Expected InvalidLength error"),
        }
    }

    #[test]
    fn test_from_bytes_rejects_long_input() {
        let long = [0u8; 17];

        assert!(matches!(
            from_bytes(&long),
            Err(UuidError::InvalidLength { actual: 17, .. })
        ));
        assert!(from_bytes(&[]).is_err());
    }

    #[test]
    fn test_from_bytes_optional() {
        assert_eq!(from_bytes_optional(&SAMPLE[..15]), Uuid::NIL);
        assert_eq!(from_bytes_optional(&SAMPLE), Uuid::from_array(SAMPLE));
    }

    #[test]
    fn test_try_from_slice() {
        let id = Uuid::try_from(&SAMPLE[..]).unwrap();
        assert_eq!(id.into_bytes(), SAMPLE);

        assert!(Uuid::try_from(&SAMPLE[1..]).is_err());
    }

    #[test]
    fn test_version_and_variant_accessors() {
        let id = Uuid::from_array(SAMPLE);

        assert_eq!(id.version(), 4);
        assert!(id.is_rfc4122_variant());
        assert_eq!(Uuid::NIL.version(), 0);
        assert!(!Uuid::NIL.is_rfc4122_variant());
    }

    #[test]
    fn test_interop_with_uuid_crate() {
        let external = ::uuid::Uuid::new_v4();
        let id = Uuid::from(external);

        assert_eq!(id.as_bytes(), external.as_bytes());
        assert_eq!(id.to_string(), external.hyphenated().to_string());
        assert_eq!(id.raw_string(), external.simple().to_string());
        assert_eq!(::uuid::Uuid::from(id), external);
    }

    #[test]
    fn test_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let id1 = Uuid::from_array(SAMPLE);
        let id2 = from_bytes(&SAMPLE).unwrap();

        let mut hasher1 = DefaultHasher::new();
        let mut hasher2 = DefaultHasher::new();

        id1.hash(&mut hasher1);
        id2.hash(&mut hasher2);

        assert_eq!(hasher1.finish(), hasher2.finish());
    }
}
