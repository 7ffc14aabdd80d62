//! Gregorian timestamps embedded in version 1 and version 6 UUIDs

#[cfg(not(feature = "std"))]
use core as std;

use crate::Uuid;
use std::fmt;

/// Number of 100-nanosecond ticks in a second.
const TICKS_PER_SECOND: u64 = 10_000_000;

/// Number of 100-nanosecond ticks between 1582-10-15T00:00:00Z and 1970-01-01T00:00:00Z.
const GREGORIAN_TO_UNIX_TICKS: u64 = 122_192_928_000_000_000;

/// Mask over the 12 timestamp bits of the `time_hi_and_version` field.
const TIME_HI_MASK: u16 = 0x0fff;

/// Represents the 60-bit count of 100-nanosecond intervals since 00:00:00.00, 15 October 1582
/// (the date of Gregorian reform to the Christian calendar) embedded in a time-based UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates an object from a count of 100-nanosecond ticks since the Gregorian epoch.
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Returns the count of 100-nanosecond ticks since the Gregorian epoch.
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Returns the number of seconds and the sub-second nanoseconds since the Unix epoch.
    ///
    /// The seconds are negative for instants before 1970; the nanoseconds are always counted
    /// forward from the second. This conversion never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let ts = Uuid::NAMESPACE_DNS.timestamp_v1()?;
    /// assert_eq!(ts.to_unix(), (886_630_433, 151_182_400)); // 1998-02-04T22:13:53.1511824Z
    /// # Ok::<(), uuid_rfc4122::VersionError>(())
    /// ```
    pub const fn to_unix(&self) -> (i64, u32) {
        let secs = (self.0 / TICKS_PER_SECOND) as i64;
        let nanos = (self.0 % TICKS_PER_SECOND) as u32 * 100;
        (
            secs - (GREGORIAN_TO_UNIX_TICKS / TICKS_PER_SECOND) as i64,
            nanos,
        )
    }

    /// Returns the instant as [`SystemTime`](std::time::SystemTime), or `None` if the platform
    /// cannot represent it (e.g. dates before 1601 on Windows).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn to_system_time(&self) -> Option<std::time::SystemTime> {
        use std::time::{Duration, UNIX_EPOCH};
        let (secs, nanos) = self.to_unix();
        let base = if secs < 0 {
            UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))?
        } else {
            UNIX_EPOCH.checked_add(Duration::from_secs(secs as u64))?
        };
        base.checked_add(Duration::from_nanos(nanos as u64))
    }
}

impl From<Timestamp> for u64 {
    fn from(src: Timestamp) -> Self {
        src.0
    }
}

impl Uuid {
    /// Returns the timestamp embedded in a version 1 UUID.
    ///
    /// The 60-bit value is reassembled from `time_low` (bytes 0-3), `time_mid` (bytes 4-5), and
    /// the low 12 bits of `time_hi_and_version` (bytes 6-7).
    ///
    /// # Errors
    ///
    /// Returns an error if the version field is not 1.
    pub fn timestamp_v1(&self) -> Result<Timestamp, VersionError> {
        self.expect_version(1)?;
        let (hi, mid, low) = self.time_fields();
        Ok(Timestamp(low + (mid << 32) + (hi << 48)))
    }

    /// Returns the timestamp embedded in a version 6 UUID.
    ///
    /// The 60-bit value is reassembled from `time_high` (bytes 0-3), `time_mid` (bytes 4-5), and
    /// the low 12 bits of `time_low_and_version` (bytes 6-7).
    ///
    /// # Errors
    ///
    /// Returns an error if the version field is not 6.
    pub fn timestamp_v6(&self) -> Result<Timestamp, VersionError> {
        self.expect_version(6)?;
        let (low, mid, hi) = self.time_fields();
        Ok(Timestamp(low + (mid << 12) + (hi << 28)))
    }

    /// Returns the embedded timestamp if this is a version 1 or version 6 UUID.
    pub fn get_timestamp(&self) -> Option<Timestamp> {
        match self.version() {
            1 => self.timestamp_v1().ok(),
            6 => self.timestamp_v6().ok(),
            _ => None,
        }
    }

    fn expect_version(&self, expected: u8) -> Result<(), VersionError> {
        if self.version() == expected {
            Ok(())
        } else {
            Err(VersionError {
                uuid: *self,
                expected,
            })
        }
    }

    /// Splits the first eight bytes into big-endian 32-, 16-, and 12-bit fragments.
    fn time_fields(&self) -> (u64, u64, u64) {
        let b = &self.0;
        (
            u16::from_be_bytes([b[6], b[7]]) as u64 & TIME_HI_MASK as u64,
            u16::from_be_bytes([b[4], b[5]]) as u64,
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64,
        )
    }
}

/// Error requesting a timestamp from a UUID of another version.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VersionError {
    uuid: Uuid,
    expected: u8,
}

impl VersionError {
    /// Returns the UUID that was inspected.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the version that the operation requires.
    pub fn expected(&self) -> u8 {
        self.expected
    }

    /// Returns the version actually found.
    pub fn actual(&self) -> u8 {
        self.uuid.version()
    }
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is version {}, not version {}",
            self.uuid,
            self.actual(),
            self.expected
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for VersionError {}
