#[cfg(not(feature = "std"))]
use core as std;

use crate::ParseError;
use fstr::FStr;
use std::fmt;

/// Represents a Universally Unique IDentifier.
///
/// The 16 bytes are stored in the RFC 4122 wire order (`time_low`, `time_mid`,
/// `time_hi_and_version`, `clock_seq_hi_and_reserved`, `clock_seq_low`, `node`), so the in-memory
/// layout and the binary representation are the same thing.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid(pub(crate) [u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::parse_or_panic("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::parse_or_panic("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::parse_or_panic("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::parse_or_panic("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `true` if every bit is zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns `true` if every bit is one.
    pub const fn is_max(&self) -> bool {
        u128::from_be_bytes(self.0) == u128::MAX
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// The bytes are copied verbatim; no byte-order transformation takes place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = Uuid::from_slice(&[0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1,
    ///                            0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8])?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    ///
    /// assert!(Uuid::from_slice(&[0u8; 15]).is_err());
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError::invalid_byte_length(src.len()))
    }

    /// Same as [`Uuid::from_slice`], but returns [`Uuid::NIL`] instead of an error.
    pub fn from_slice_or_nil(src: &[u8]) -> Self {
        Self::from_slice(src).unwrap_or(Self::NIL)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        self.encode_with(DIGITS_LOWER)
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    pub fn encode_hex(&self) -> FStr<32> {
        self.encode_with(DIGITS_LOWER)
    }

    /// Writes the hexadecimal digits into a 36-byte (hyphenated) or 32-byte (hash-like) buffer.
    pub(crate) fn encode_with<const N: usize>(&self, digits: &[u8; 16]) -> FStr<N> {
        debug_assert!(N == 36 || N == 32);
        let mut buffer = [0u8; N];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            *buf_iter.next().unwrap() = digits[(e >> 4) as usize];
            *buf_iter.next().unwrap() = digits[(e & 15) as usize];
            if N == 36 && (i == 3 || i == 5 || i == 7 || i == 9) {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII bytes
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

pub(crate) const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
pub(crate) const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;
    use crate::ParseError;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens};
        use serde_test::{Compact, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "1d19dad6-ba7b-6810-80b4-00c04fd430c8",
                    &[
                        29, 25, 218, 214, 186, 123, 104, 16, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
                    &[
                        1, 127, 34, 226, 121, 176, 124, 195, 152, 196, 220, 12, 12, 7, 57, 143,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes every accepted text spelling
        #[test]
        fn deserializes_every_accepted_text_spelling() {
            let e = Uuid::NAMESPACE_DNS;
            for text in [
                "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
                "6ba7b8109dad11d180b400c04fd430c8",
                "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
            ] {
                assert_de_tokens(&e.readable(), &[Token::Str(text)]);
            }
        }

        /// Rejects byte arrays of wrong length
        #[test]
        fn rejects_byte_arrays_of_wrong_length() {
            assert_de_tokens_error::<Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 15])],
                "UUID must be exactly 16 bytes long, got 15 bytes",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Uuid;

    const DNS_BYTES: [u8; 16] = [
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ];

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::NIL.is_max());
        assert!(Uuid::MAX.is_max());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Provides predefined namespace UUIDs
    #[test]
    fn provides_predefined_namespace_uuids() {
        assert_eq!(Uuid::NAMESPACE_DNS.as_bytes(), &DNS_BYTES);
        assert_eq!(
            &Uuid::NAMESPACE_URL.encode() as &str,
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            &Uuid::NAMESPACE_OID.encode() as &str,
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            &Uuid::NAMESPACE_X500.encode() as &str,
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    /// Decodes 16-byte slices verbatim
    #[test]
    fn decodes_16_byte_slices_verbatim() {
        assert_eq!(Uuid::from_slice(&DNS_BYTES), Ok(Uuid::NAMESPACE_DNS));
        assert_eq!(Uuid::try_from(&DNS_BYTES[..]), Ok(Uuid::NAMESPACE_DNS));
        for _ in 0..1_000 {
            let bytes: [u8; 16] = rand::random();
            let e = Uuid::from_slice(&bytes).unwrap();
            assert_eq!(e.as_bytes(), &bytes);
            assert_eq!(Uuid::from_slice(e.as_ref()), Ok(e));
        }
    }

    /// Returns error to byte slices of wrong length
    #[test]
    fn returns_error_to_byte_slices_of_wrong_length() {
        let buffer = [0x5au8; 32];
        for len in [0, 1, 15, 17, 32] {
            let err = Uuid::from_slice(&buffer[..len]).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("UUID must be exactly 16 bytes long, got {} bytes", len)
            );
            assert_eq!(Uuid::from_slice_or_nil(&buffer[..len]), Uuid::NIL);
        }
        assert_eq!(Uuid::from_slice_or_nil(&DNS_BYTES), Uuid::NAMESPACE_DNS);
    }

    /// Encodes canonical lowercase string
    #[test]
    fn encodes_canonical_lowercase_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        for _ in 0..1_000 {
            let e = Uuid::from(rand::random::<u128>());
            let text = e.to_string();
            assert!(re.is_match(&text));
            assert_eq!(&e.encode() as &str, text);
            assert_eq!(text.parse(), Ok(e));
            assert_eq!(e.encode_hex().len(), 32);
            assert_eq!(&e.encode_hex() as &str, text.replace('-', ""));
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for _ in 0..1_000 {
            let e = Uuid::from(rand::random::<[u8; 16]>());
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(*e.as_bytes()), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), e.as_bytes());
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).to_string(), e.to_string());
        }
    }
}
