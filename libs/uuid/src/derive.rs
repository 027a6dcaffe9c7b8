//! Name-based UUID derivation.
//!
//! A record UUID is the RFC 4122 version 5 UUID of the name
//! `{prefix}:{internal_id}` in the URL namespace:
//!
//! 1. SHA-1 over `NAMESPACE_URL || utf8(name)`
//! 2. keep the first 16 of the 20 digest bytes
//! 3. stamp version `5` into byte 6 and variant `10` into byte 8
//! 4. format as 8-4-4-4-12 lowercase hex

use tracing::trace;

use crate::hasher::{NameHasher, Sha1Hasher, DIGEST_LEN};
use crate::{RecordUuid, UuidError, NAMESPACE_URL};

/// Separator between the scheme prefix and the internal ID.
const NAME_SEPARATOR: char = ':';

/// Builds the hashed name `{prefix}:{internal_id}`.
#[must_use]
pub fn canonical_name(prefix: &str, internal_id: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + 1 + internal_id.len());
    name.push_str(prefix);
    name.push(NAME_SEPARATOR);
    name.push_str(internal_id);
    name
}

/// Derives the record UUID for `prefix` and `internal_id`.
///
/// Returns the canonical hyphenated string, e.g.
/// `7f476110-58fd-5698-b104-8b29c3ac6d55` for
/// `("clueweb12", "clueweb12-0200wb-93-16911")`.
#[must_use]
pub fn derive(prefix: &str, internal_id: &str) -> String {
    derive_uuid(prefix, internal_id).to_string()
}

/// Derives the record UUID for `prefix` and `internal_id` in typed form.
#[must_use]
pub fn derive_uuid(prefix: &str, internal_id: &str) -> RecordUuid {
    let name = canonical_name(prefix, internal_id);
    let digest = Sha1Hasher.digest_name(&NAMESPACE_URL, name.as_bytes());
    let id = from_digest(&digest);
    trace!(prefix, internal_id, uuid = %id, "derived record uuid");
    id
}

/// Derives the record UUID using a caller-supplied digest backend.
pub(crate) fn try_derive_with<H: NameHasher + ?Sized>(
    hasher: &H,
    prefix: &str,
    internal_id: &str,
) -> Result<RecordUuid, UuidError> {
    let name = canonical_name(prefix, internal_id);
    let digest = hasher.digest(&NAMESPACE_URL, name.as_bytes())?;
    let id = from_digest(&digest);
    trace!(prefix, internal_id, uuid = %id, "derived record uuid");
    Ok(id)
}

/// Keeps the first 16 digest bytes; the last 4 are discarded.
fn from_digest(digest: &[u8; DIGEST_LEN]) -> RecordUuid {
    let mut truncated = [0u8; 16];
    truncated.copy_from_slice(&digest[..16]);
    RecordUuid::from_digest_prefix(truncated)
}
