//! JSON adapters.
//!
//! [`Uuid::marshal_json`] and [`Uuid::unmarshal_json`] work on raw JSON bytes and need no
//! serialisation framework. With the `serde` feature (on by default) `Uuid` also implements
//! `Serialize` and `Deserialize`: human-readable formats use the canonical string, binary
//! formats use the 16 raw bytes.

use crate::parse::parse_bytes;
use crate::{Uuid, UuidResult};

impl Uuid {
    /// Encodes the UUID as a JSON string literal, `"xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"`.
    pub fn marshal_json(&self) -> Vec<u8> {
        format!("\"{}\"", self).into_bytes()
    }

    /// Decodes a JSON value into the receiver.
    ///
    /// The input is handed to the parser as-is, surrounding quotes included, and follows the
    /// same rules as [`crate::parse`]. Bytes that are not valid UTF-8 are treated like any
    /// other non-hex byte.
    ///
    /// # Errors
    ///
    /// Returns the parse error. The receiver is left untouched on failure.
    pub fn unmarshal_json(&mut self, input: &[u8]) -> UuidResult<()> {
        let parsed = parse_bytes(input)?;
        self.set(parsed);
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use crate::storage::from_byte_value;
    use crate::{parse, Uuid};
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Uuid {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    struct UuidVisitor;

    impl<'de> Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a UUID string or 16 bytes")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse(v).map_err(E::custom)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            from_byte_value(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Uuid {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, UuidError};

    const CANONICAL: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_marshal_nil() {
        let json = Uuid::NIL.marshal_json();

        assert_eq!(json, b"\"00000000-0000-0000-0000-000000000000\"");
        assert_eq!(json.len(), 38);
    }

    #[test]
    fn test_unmarshal_quoted() {
        let mut id = Uuid::NIL;
        id.unmarshal_json(format!("\"{}\"", CANONICAL).as_bytes())
            .unwrap();

        assert_eq!(id.to_string(), CANONICAL);
    }

    #[test]
    fn test_unmarshal_unquoted_raw() {
        let mut id = Uuid::NIL;
        id.unmarshal_json(b"550e8400e29b41d4a716446655440000")
            .unwrap();

        assert_eq!(id.to_string(), CANONICAL);
    }

    #[test]
    fn test_marshal_unmarshal_round_trip() {
        let original = parse(CANONICAL).unwrap();
        let mut decoded = Uuid::NIL;

        decoded.unmarshal_json(&original.marshal_json()).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_unmarshal_failure_leaves_receiver_untouched() {
        let original = parse(CANONICAL).unwrap();
        let mut id = original;

        let result = id.unmarshal_json(b"\"nope\"");

        assert!(matches!(result, Err(UuidError::UnrecognizedFormat { .. })));
        assert_eq!(id, original);
    }

    #[test]
    fn test_unmarshal_invalid_utf8() {
        let mut id = Uuid::NIL;
        let mut input = vec![b'"'];
        input.extend_from_slice(&[0xff; 36]);
        input.push(b'"');

        assert!(matches!(
            id.unmarshal_json(&input),
            Err(UuidError::InvalidHexDigit(_))
        ));
        assert!(id.is_zero());
    }

    #[test]
    fn test_unmarshal_trailing_non_utf8_byte_is_hex_error() {
        let mut input = b"550e8400-e29b-41d4-a716-44665544000".to_vec();
        input.push(0xff);
        let mut id = Uuid::NIL;

        assert!(matches!(
            id.unmarshal_json(&input),
            Err(UuidError::InvalidHexDigit(_))
        ));
        assert!(id.is_zero());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Record {
            id: Uuid,
            parent: Option<Uuid>,
        }

        #[test]
        fn test_serialize_as_canonical_string() {
            let id = parse(CANONICAL).unwrap();
            let json = serde_json::to_string(&id).unwrap();

            assert_eq!(json, format!("\"{}\"", CANONICAL));
            assert_eq!(json.as_bytes(), id.marshal_json().as_slice());
        }

        #[test]
        fn test_deserialize_canonical_and_raw() {
            let canonical: Uuid = serde_json::from_str(&format!("\"{}\"", CANONICAL)).unwrap();
            let raw: Uuid =
                serde_json::from_str("\"550e8400e29b41d4a716446655440000\"").unwrap();

            assert_eq!(canonical, raw);
        }

        #[test]
        fn test_deserialize_rejects_bad_input() {
            let result: Result<Uuid, _> = serde_json::from_str("\"not-a-uuid\"");
            assert!(result.is_err());

            let result: Result<Uuid, _> = serde_json::from_str("42");
            assert!(result.is_err());
        }

        #[test]
        fn test_struct_round_trip() {
            let record = Record {
                id: parse(CANONICAL).unwrap(),
                parent: None,
            };

            let json = serde_json::to_string(&record).unwrap();
            let decoded: Record = serde_json::from_str(&json).unwrap();

            assert_eq!(
                json,
                format!("{{\"id\":\"{}\",\"parent\":null}}", CANONICAL)
            );
            assert_eq!(decoded, record);
        }
    }
}
