//! The typed result of a derivation.

use std::fmt;

/// Length of the hyphenated string form.
pub(crate) const HYPHENATED_LEN: usize = 36;

/// Hex offsets that are followed by a hyphen.
const GROUP_BREAKS: [usize; 4] = [8, 12, 16, 20];

/// A version 5 UUID derived from a record name.
///
/// Always carries version nibble `5` and the RFC 4122 variant.
/// Displays as lowercase `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordUuid([u8; 16]);

impl RecordUuid {
    /// Builds a UUID from truncated digest bytes, stamping version and variant.
    #[must_use]
    pub(crate) fn from_digest_prefix(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0F) | 0x50;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        Self(bytes)
    }

    /// Returns the 16 big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID, returning its bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the version number (always 5).
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Formats the UUID in its canonical hyphenated form.
    #[must_use]
    pub fn to_hyphenated(&self) -> String {
        let hex = hex::encode(self.0);
        let mut out = String::with_capacity(HYPHENATED_LEN);
        for (i, c) in hex.chars().enumerate() {
            if GROUP_BREAKS.contains(&i) {
                out.push('-');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for RecordUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hyphenated())
    }
}

impl From<RecordUuid> for uuid::Uuid {
    fn from(id: RecordUuid) -> Self {
        uuid::Uuid::from_bytes(id.0)
    }
}

impl From<RecordUuid> for [u8; 16] {
    fn from(id: RecordUuid) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for RecordUuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for RecordUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hyphenated())
    }
}
