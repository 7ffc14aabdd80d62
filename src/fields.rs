//! Version and variant bits

use crate::Uuid;

/// Index of the `time_hi_and_version` byte that holds the version nibble.
const VERSION_BYTE: usize = 6;

/// Index of the `clock_seq_hi_and_reserved` byte that holds the variant bits.
const VARIANT_BYTE: usize = 8;

/// Represents the variant field, the leading bits of the `clock_seq_hi_and_reserved` byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved, NCS backward compatibility
    Ncs,
    /// `10x`: the layout defined by RFC 4122
    Rfc4122,
    /// `110`: reserved, Microsoft Corporation backward compatibility
    Microsoft,
    /// `111`: reserved for future definition
    Future,
}

impl Variant {
    /// Returns the `(mask, pattern)` pair that clears and sets the leading bits of the variant
    /// byte.
    const fn bits(self) -> (u8, u8) {
        match self {
            Self::Ncs => (0x7f, 0x00),
            Self::Rfc4122 => (0x3f, 0x80),
            Self::Microsoft => (0x1f, 0xc0),
            Self::Future => (0x1f, 0xe0),
        }
    }
}

impl From<u8> for Variant {
    /// Maps the numeric discriminants `0..=3`; any other number maps to [`Variant::Future`].
    fn from(src: u8) -> Self {
        match src {
            0 => Self::Ncs,
            1 => Self::Rfc4122,
            2 => Self::Microsoft,
            _ => Self::Future,
        }
    }
}

/// Versions defined by RFC 4122 and the k-sortable draft.
///
/// Version 2 (DCE security) is not supported and has no counterpart here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Version 1: Gregorian time and MAC address
    Mac = 1,
    /// Version 3: MD5 name-based
    Md5 = 3,
    /// Version 4: random
    Random = 4,
    /// Version 5: SHA-1 name-based
    Sha1 = 5,
    /// Version 6: field-compatible version 1 reordered for sortability
    SortMac = 6,
    /// Version 7: Unix Epoch time-based
    SortRand = 7,
}

impl Uuid {
    /// Returns the raw 4-bit version field, the high nibble of byte 6.
    ///
    /// No check is made that the value names a known version.
    pub const fn version(&self) -> u8 {
        self.0[VERSION_BYTE] >> 4
    }

    /// Returns the version field as a known [`Version`], or `None` if the nibble is 0, 2, or
    /// 8-15.
    pub const fn get_version(&self) -> Option<Version> {
        match self.version() {
            1 => Some(Version::Mac),
            3 => Some(Version::Md5),
            4 => Some(Version::Random),
            5 => Some(Version::Sha1),
            6 => Some(Version::SortMac),
            7 => Some(Version::SortRand),
            _ => None,
        }
    }

    /// Returns the variant field.
    pub const fn variant(&self) -> Variant {
        // the patterns overlap, so the order of tests is significant
        let b = self.0[VARIANT_BYTE];
        if b >> 7 == 0b0 {
            Variant::Ncs
        } else if b >> 6 == 0b10 {
            Variant::Rfc4122
        } else if b >> 5 == 0b110 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Sets the version field to the low four bits of `version`, leaving every other bit as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{Uuid, Variant};
    ///
    /// let mut x = Uuid::NIL;
    /// x.set_version(4);
    /// x.set_variant(Variant::Rfc4122);
    /// assert_eq!(x.to_string(), "00000000-0000-4000-8000-000000000000");
    /// ```
    pub fn set_version(&mut self, version: u8) {
        *self = self.with_version(version);
    }

    /// Sets the variant field, leaving every other bit as is.
    pub fn set_variant(&mut self, variant: Variant) {
        *self = self.with_variant(variant);
    }

    /// Returns a copy with the version field replaced by the low four bits of `version`.
    pub const fn with_version(self, version: u8) -> Self {
        let mut bytes = self.0;
        bytes[VERSION_BYTE] = (bytes[VERSION_BYTE] & 0x0f) | ((version & 0x0f) << 4);
        Self(bytes)
    }

    /// Returns a copy with the variant field replaced.
    pub const fn with_variant(self, variant: Variant) -> Self {
        let (mask, pattern) = variant.bits();
        let mut bytes = self.0;
        bytes[VARIANT_BYTE] = (bytes[VARIANT_BYTE] & mask) | pattern;
        Self(bytes)
    }
}
