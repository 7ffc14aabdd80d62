//! Alternative textual representations and the verb-driven formatting interface

#[cfg(not(feature = "std"))]
use core as std;

use crate::id::{DIGITS_LOWER, DIGITS_UPPER};
use crate::Uuid;
use alloc::string::String;
use fstr::FStr;
use std::fmt::{self, Write as _};

/// Closed set of output representations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Format {
    /// `6ba7b8109dad11d180b400c04fd430c8`
    HexLower,
    /// `6BA7B8109DAD11D180B400C04FD430C8`
    HexUpper,
    /// `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
    Canonical,
    /// `6BA7B810-9DAD-11D1-80B4-00C04FD430C8`
    CanonicalUpper,
    /// `"6ba7b810-9dad-11d1-80b4-00c04fd430c8"`
    Quoted,
    /// `[0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]`
    DebugLiteral,
}

impl Format {
    /// Maps a format verb to a representation.
    ///
    /// | Verb            | Format                       |
    /// | --------------- | ---------------------------- |
    /// | `x`             | [`Format::HexLower`]         |
    /// | `X`             | [`Format::HexUpper`]         |
    /// | `v`, `+v`, `s`  | [`Format::Canonical`]        |
    /// | `S`             | [`Format::CanonicalUpper`]   |
    /// | `q`             | [`Format::Quoted`]           |
    /// | `#v`            | [`Format::DebugLiteral`]     |
    ///
    /// Returns `None` for any other verb.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "x" => Some(Self::HexLower),
            "X" => Some(Self::HexUpper),
            "v" | "+v" | "s" => Some(Self::Canonical),
            "S" => Some(Self::CanonicalUpper),
            "q" => Some(Self::Quoted),
            "#v" => Some(Self::DebugLiteral),
            _ => None,
        }
    }
}

impl Uuid {
    /// Returns a [`Display`](fmt::Display)able wrapper that renders the UUID in `format`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{Format, Uuid};
    ///
    /// let x = Uuid::NAMESPACE_URL;
    /// assert_eq!(x.display(Format::HexUpper).to_string(), "6BA7B8119DAD11D180B400C04FD430C8");
    /// assert_eq!(x.display(Format::Quoted).to_string(), "\"6ba7b811-9dad-11d1-80b4-00c04fd430c8\"");
    /// ```
    pub const fn display(&self, format: Format) -> Formatted {
        Formatted {
            uuid: *self,
            format,
        }
    }

    /// Returns a [`Display`](fmt::Display)able wrapper for the representation named by `verb`
    /// (see [`Format::from_verb`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `verb` names no supported representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_OID;
    /// assert_eq!(x.format_verb("S")?.to_string(), "6BA7B812-9DAD-11D1-80B4-00C04FD430C8");
    /// assert_eq!(
    ///     x.format_verb("p").unwrap_err().to_string(),
    ///     "unsupported format verb \"p\" for UUID 6ba7b812-9dad-11d1-80b4-00c04fd430c8"
    /// );
    /// # Ok::<(), uuid_rfc4122::FormatError>(())
    /// ```
    pub fn format_verb(&self, verb: &str) -> Result<Formatted, FormatError> {
        match Format::from_verb(verb) {
            Some(format) => Ok(self.display(format)),
            None => Err(FormatError {
                verb: verb.into(),
                uuid: *self,
            }),
        }
    }
}

/// A UUID paired with the representation to render it in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Formatted {
    uuid: Uuid,
    format: Format,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::HexLower => f.write_str(&self.uuid.encode_with::<32>(DIGITS_LOWER)),
            Format::HexUpper => f.write_str(&self.uuid.encode_with::<32>(DIGITS_UPPER)),
            Format::Canonical => f.write_str(&self.uuid.encode()),
            Format::CanonicalUpper => f.write_str(&self.uuid.encode_with::<36>(DIGITS_UPPER)),
            Format::Quoted => {
                f.write_char('"')?;
                f.write_str(&self.uuid.encode())?;
                f.write_char('"')
            }
            Format::DebugLiteral => {
                f.write_char('[')?;
                for (i, e) in self.uuid.as_bytes().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:#04x}", e)?;
                }
                f.write_char(']')
            }
        }
    }
}

impl fmt::LowerHex for Uuid {
    /// Returns the 32-digit lowercase hexadecimal representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex())
    }
}

impl fmt::UpperHex for Uuid {
    /// Returns the 32-digit uppercase hexadecimal representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer: FStr<32> = self.encode_with(DIGITS_UPPER);
        f.write_str(&buffer)
    }
}

/// Error requesting a representation by an unknown verb.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FormatError {
    verb: String,
    uuid: Uuid,
}

impl FormatError {
    /// Returns the rejected verb.
    pub fn verb(&self) -> &str {
        &self.verb
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported format verb {:?} for UUID {}",
            self.verb, self.uuid
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::{Format, Uuid};

    /// Renders every representation of a prepared case
    #[test]
    fn renders_every_representation_of_a_prepared_case() {
        let e = Uuid::NAMESPACE_DNS;
        let cases = [
            (Format::HexLower, "6ba7b8109dad11d180b400c04fd430c8"),
            (Format::HexUpper, "6BA7B8109DAD11D180B400C04FD430C8"),
            (Format::Canonical, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (Format::CanonicalUpper, "6BA7B810-9DAD-11D1-80B4-00C04FD430C8"),
            (Format::Quoted, "\"6ba7b810-9dad-11d1-80b4-00c04fd430c8\""),
            (
                Format::DebugLiteral,
                "[0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, \
                 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]",
            ),
        ];
        for (format, text) in cases {
            assert_eq!(e.display(format).to_string(), text);
        }
    }

    /// Maps verbs to representations
    #[test]
    fn maps_verbs_to_representations() {
        let e = Uuid::NAMESPACE_X500;
        let cases = [
            ("x", "6ba7b8149dad11d180b400c04fd430c8"),
            ("X", "6BA7B8149DAD11D180B400C04FD430C8"),
            ("v", "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
            ("+v", "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
            ("s", "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
            ("S", "6BA7B814-9DAD-11D1-80B4-00C04FD430C8"),
            ("q", "\"6ba7b814-9dad-11d1-80b4-00c04fd430c8\""),
        ];
        for (verb, text) in cases {
            assert_eq!(e.format_verb(verb).unwrap().to_string(), text);
        }
        assert_eq!(
            e.format_verb("#v").unwrap().to_string(),
            e.display(Format::DebugLiteral).to_string()
        );
    }

    /// Returns error to unsupported verbs
    #[test]
    fn returns_error_to_unsupported_verbs() {
        let e = Uuid::NAMESPACE_DNS;
        for verb in ["", "p", "d", "#x", "V", "xx"] {
            let err = e.format_verb(verb).unwrap_err();
            assert_eq!(err.verb(), verb);
            assert_eq!(
                err.to_string(),
                format!(
                    "unsupported format verb {:?} for UUID 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    verb
                )
            );
        }
    }

    /// Agrees with standard formatting traits
    #[test]
    fn agrees_with_standard_formatting_traits() {
        for _ in 0..1_000 {
            let e = Uuid::from(rand::random::<u128>());
            let n = u128::from(e);
            assert_eq!(format!("{:x}", e), format!("{:032x}", n));
            assert_eq!(format!("{:X}", e), format!("{:032X}", n));
            assert_eq!(format!("{}", e), e.display(Format::Canonical).to_string());
            assert_eq!(
                format!("{}", e.display(Format::CanonicalUpper)),
                e.to_string().to_uppercase()
            );
            assert_eq!(e.display(Format::HexLower).to_string(), format!("{:x}", e));
        }
    }
}
