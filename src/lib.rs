//! A UUID value type with RFC 4122 bit-field accessors and multi-format codecs
//!
//! ```rust
//! use uuid_rfc4122::{Uuid, Variant};
//!
//! let uuid = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
//! println!("{}", uuid); // "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! assert_eq!(uuid.version(), 1);
//! assert_eq!(uuid.variant(), Variant::Rfc4122);
//! println!("{:?}", uuid.timestamp_v1()?.to_unix()); // (886630433, 151182400)
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122) and
//! [draft-peabody-dispatch-new-uuid-format-02](https://datatracker.ietf.org/doc/html/draft-peabody-dispatch-new-uuid-format-02).
//!
//! # Field and bit layout
//!
//! A [`Uuid`] stores 16 bytes in the order they appear on the wire. Version 1 identifiers use the
//! following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Version 6 keeps the same 60-bit timestamp but stores its most significant 32 bits first, then
//! the middle 16 bits, then the least significant 12 bits next to `ver`, so that the byte order of
//! identifiers follows their creation time.
//!
//! - The 4-bit `ver` field is the high nibble of byte 6. It is read with [`Uuid::version`] and
//!   written with [`Uuid::set_version`].
//! - The `var` field occupies the leading one to three bits of byte 8. It is read with
//!   [`Uuid::variant`] and written with [`Uuid::set_variant`].
//! - The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15T00:00:00Z. It is
//!   extracted with [`Uuid::timestamp_v1`] or [`Uuid::timestamp_v6`].
//!
//! # Text and binary representations
//!
//! The parser accepts the canonical 8-4-4-4-12 form, 32 bare hex digits, either of them in braces,
//! and either of them after a `urn:uuid:` prefix. The encoder always produces the lowercase
//! canonical form. The binary form is the 16 stored bytes as is.
//!
//! ```rust
//! use uuid_rfc4122::Uuid;
//!
//! let x = Uuid::parse_str("urn:uuid:6ba7b8109dad11d180b400c04fd430c8")?;
//! assert_eq!(x, Uuid::NAMESPACE_DNS);
//! assert_eq!(Uuid::from_slice(x.as_bytes())?, x);
//! assert_eq!(format!("{:X}", x), "6BA7B8109DAD11D180B400C04FD430C8");
//! # Ok::<(), uuid_rfc4122::ParseError>(())
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod id;
pub use id::Uuid;

mod parse;
pub use parse::{ParseError, ParseErrorKind};

mod fields;
pub use fields::{Variant, Version};

mod timestamp;
pub use timestamp::{Timestamp, VersionError};

mod format;
pub use format::{Format, FormatError, Formatted};
