//! Text decoder that accepts the canonical, braced, URN, and hash-like spellings.

#[cfg(not(feature = "std"))]
use core as std;

use crate::Uuid;
use alloc::string::String;
use std::{fmt, str};

/// Byte offsets of the 16 hex-digit pairs in the 8-4-4-4-12 form.
const CANONICAL_OFFSETS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

impl Uuid {
    /// Creates an object from any of the supported string representations.
    ///
    /// The following spellings are accepted, with hex digits in either case:
    ///
    /// ```text
    /// 6ba7b810-9dad-11d1-80b4-00c04fd430c8
    /// {6ba7b810-9dad-11d1-80b4-00c04fd430c8}
    /// urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8
    /// 6ba7b8109dad11d180b400c04fd430c8
    /// {6ba7b8109dad11d180b400c04fd430c8}
    /// urn:uuid:6ba7b8109dad11d180b400c04fd430c8
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = Uuid::parse_str("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// let y = Uuid::parse_str("{6BA7B8109DAD11D180B400C04FD430C8}")?;
    /// assert_eq!(x, y);
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        match decode(src.as_bytes()) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(fault) => Err(fault.into_error(src)),
        }
    }

    /// Same as [`Uuid::parse_str`], but returns [`Uuid::NIL`] instead of an error.
    pub fn parse_str_or_nil(src: &str) -> Self {
        Self::parse_str(src).unwrap_or(Self::NIL)
    }

    /// Creates an object from a string representation, or panics if the string is invalid.
    ///
    /// This function is intended for constant and static initializers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// const PACKAGE_ID: Uuid = Uuid::parse_or_panic("123e4567-e89b-12d3-a456-426655440000");
    /// assert_eq!(PACKAGE_ID.version(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a supported string representation.
    pub const fn parse_or_panic(src: &str) -> Self {
        match decode(src.as_bytes()) {
            Ok(bytes) => Self(bytes),
            Err(_) => panic!("invalid UUID string representation"),
        }
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any of the supported string representations.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

/// Allocation-free failure report of the decoder; converted to [`ParseError`] afterwards.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Fault {
    Length,
    /// Byte range of the malformed fragment within the input.
    Structure(usize, usize),
    HexDigit(usize),
}

impl Fault {
    fn into_error(self, src: &str) -> ParseError {
        let kind = match self {
            Self::Length => ParseErrorKind::InvalidLength {
                len: src.len(),
                input: src.into(),
            },
            Self::Structure(start, end) => ParseErrorKind::InvalidStructure {
                fragment: String::from_utf8_lossy(&src.as_bytes()[start..end]).into_owned(),
            },
            Self::HexDigit(position) => ParseErrorKind::InvalidHexDigit { position },
        };
        ParseError { kind }
    }
}

/// Dispatches on the input length and strips the braces or URN prefix if present.
const fn decode(src: &[u8]) -> Result<[u8; 16], Fault> {
    let len = src.len();
    let (start, body_len) = match len {
        32 | 36 => (0, len),
        34 | 38 => {
            if src[0] != b'{' || src[len - 1] != b'}' {
                return Err(Fault::Structure(0, len));
            }
            (1, len - 2)
        }
        41 | 45 => {
            let mut i = 0;
            while i < URN_PREFIX.len() {
                if src[i] != URN_PREFIX[i] {
                    return Err(Fault::Structure(0, URN_PREFIX.len()));
                }
                i += 1;
            }
            (URN_PREFIX.len(), len - URN_PREFIX.len())
        }
        _ => return Err(Fault::Length),
    };

    if body_len == 36 {
        decode_canonical(src, start)
    } else {
        decode_hash_like(src, start)
    }
}

/// Decodes `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` starting at `start`.
const fn decode_canonical(src: &[u8], start: usize) -> Result<[u8; 16], Fault> {
    if src[start + 8] != b'-'
        || src[start + 13] != b'-'
        || src[start + 18] != b'-'
        || src[start + 23] != b'-'
    {
        return Err(Fault::Structure(start, start + 36));
    }

    let mut dst = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        dst[i] = match decode_pair(src, start + CANONICAL_OFFSETS[i]) {
            Ok(e) => e,
            Err(fault) => return Err(fault),
        };
        i += 1;
    }
    Ok(dst)
}

/// Decodes 32 consecutive hex digits starting at `start`.
const fn decode_hash_like(src: &[u8], start: usize) -> Result<[u8; 16], Fault> {
    let mut dst = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        dst[i] = match decode_pair(src, start + 2 * i) {
            Ok(e) => e,
            Err(fault) => return Err(fault),
        };
        i += 1;
    }
    Ok(dst)
}

const fn decode_pair(src: &[u8], at: usize) -> Result<u8, Fault> {
    match (hex_value(src[at]), hex_value(src[at + 1])) {
        (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
        (None, _) => Err(Fault::HexDigit(at)),
        (_, None) => Err(Fault::HexDigit(at + 1)),
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Error parsing an invalid string or byte representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

/// Reason why a representation was rejected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The string is not 32, 34, 36, 38, 41, or 45 bytes long.
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
        /// The whole input.
        input: String,
    },

    /// The byte slice is not 16 bytes long.
    InvalidByteLength {
        /// Length of the input in bytes.
        len: usize,
    },

    /// Braces, the `urn:uuid:` prefix, or the hyphens are missing or misplaced.
    InvalidStructure {
        /// The offending part of the input.
        fragment: String,
    },

    /// A character that is not a hex digit sits in a hex-digit slot.
    InvalidHexDigit {
        /// Byte offset of the character in the input.
        position: usize,
    },
}

impl ParseError {
    /// Returns the reason of the error.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub(crate) fn invalid_byte_length(len: usize) -> Self {
        Self {
            kind: ParseErrorKind::InvalidByteLength { len },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::InvalidLength { len, input } => {
                write!(f, "incorrect UUID length {} in string {:?}", len, input)
            }
            ParseErrorKind::InvalidByteLength { len } => {
                write!(f, "UUID must be exactly 16 bytes long, got {} bytes", len)
            }
            ParseErrorKind::InvalidStructure { fragment } => {
                write!(f, "incorrect UUID format in string {:?}", fragment)
            }
            ParseErrorKind::InvalidHexDigit { position } => {
                write!(f, "invalid UUID format: bad hex digit at position {}", position)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ParseError {}
