//! Digest backends for name hashing.

use sha1::{Digest, Sha1};

use crate::UuidError;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// A SHA-1 provider for name-based UUIDs.
///
/// Implementations hash `namespace || name` as a single byte stream.
/// A backend that cannot supply SHA-1 must return
/// [`UuidError::HashAlgorithmUnavailable`] instead of a placeholder digest.
pub trait NameHasher {
    /// Hashes the namespace followed by the name.
    fn digest(&self, namespace: &[u8; 16], name: &[u8]) -> Result<[u8; DIGEST_LEN], UuidError>;
}

/// The built-in SHA-1 backend (RustCrypto `sha1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha1Hasher;

impl Sha1Hasher {
    /// Hashes the namespace followed by the name. Never fails.
    #[must_use]
    pub fn digest_name(&self, namespace: &[u8; 16], name: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha1::new();
        hasher.update(namespace);
        hasher.update(name);

        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&hasher.finalize());
        out
    }
}

impl NameHasher for Sha1Hasher {
    fn digest(&self, namespace: &[u8; 16], name: &[u8]) -> Result<[u8; DIGEST_LEN], UuidError> {
        Ok(self.digest_name(namespace, name))
    }
}

impl<H: NameHasher + ?Sized> NameHasher for &H {
    fn digest(&self, namespace: &[u8; 16], name: &[u8]) -> Result<[u8; DIGEST_LEN], UuidError> {
        (**self).digest(namespace, name)
    }
}
