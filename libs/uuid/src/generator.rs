//! Prefix-bound UUID generation.

use crate::derive::{derive_uuid, try_derive_with};
use crate::hasher::{NameHasher, Sha1Hasher};
use crate::{RecordUuid, UuidError};

/// Generates record UUIDs for a fixed scheme prefix.
///
/// Useful when deriving many UUIDs within one scheme. Output is identical to
/// calling [`derive`](crate::derive) with the same prefix.
///
/// ```
/// use webis_uuid::UuidGenerator;
///
/// let clueweb = UuidGenerator::new("clueweb12");
/// assert_eq!(
///     clueweb.generate("clueweb12-0200wb-93-16911"),
///     "7f476110-58fd-5698-b104-8b29c3ac6d55"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidGenerator<H = Sha1Hasher> {
    prefix: String,
    hasher: H,
}

impl UuidGenerator {
    /// Creates a generator bound to `prefix` using the built-in SHA-1 backend.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            hasher: Sha1Hasher,
        }
    }

    /// Derives the UUID string for `internal_id` under the bound prefix.
    #[must_use]
    pub fn generate(&self, internal_id: &str) -> String {
        self.generate_uuid(internal_id).to_string()
    }

    /// Derives the typed UUID for `internal_id` under the bound prefix.
    #[must_use]
    pub fn generate_uuid(&self, internal_id: &str) -> RecordUuid {
        derive_uuid(&self.prefix, internal_id)
    }
}

impl<H: NameHasher> UuidGenerator<H> {
    /// Creates a generator bound to `prefix` using a custom digest backend.
    pub fn with_hasher(prefix: impl Into<String>, hasher: H) -> Self {
        Self {
            prefix: prefix.into(),
            hasher,
        }
    }

    /// Returns the bound prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Derives the UUID string, propagating backend failures.
    pub fn try_generate(&self, internal_id: &str) -> Result<String, UuidError> {
        self.try_generate_uuid(internal_id).map(|id| id.to_string())
    }

    /// Derives the typed UUID, propagating backend failures.
    pub fn try_generate_uuid(&self, internal_id: &str) -> Result<RecordUuid, UuidError> {
        try_derive_with(&self.hasher, &self.prefix, internal_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::{derive, DIGEST_LEN};

    /// Backend without SHA-1 support.
    struct NoSha1;

    impl NameHasher for NoSha1 {
        fn digest(&self, _: &[u8; 16], _: &[u8]) -> Result<[u8; DIGEST_LEN], UuidError> {
            Err(UuidError::HashAlgorithmUnavailable { algorithm: "SHA-1" })
        }
    }

    #[test]
    fn test_bound_prefix_matches_free_function() {
        let generator = UuidGenerator::new("clueweb09");
        for internal_id in ["clueweb09-en0001-02-21241", "", "a:b", "x"] {
            assert_eq!(generator.generate(internal_id), derive("clueweb09", internal_id));
        }
    }

    #[test]
    fn test_prefix_accessor() {
        assert_eq!(UuidGenerator::new("cc").prefix(), "cc");
    }

    #[test]
    fn test_try_generate_with_builtin() {
        let generator = UuidGenerator::new("clueweb12");
        assert_eq!(
            generator.try_generate("clueweb12-0200wb-93-16911").unwrap(),
            "7f476110-58fd-5698-b104-8b29c3ac6d55"
        );
        assert_eq!(
            generator.try_generate_uuid("x").unwrap(),
            generator.generate_uuid("x")
        );
    }

    #[test]
    fn test_missing_hash_algorithm_propagates() {
        let generator = UuidGenerator::with_hasher("clueweb12", NoSha1);
        let err = generator.try_generate("clueweb12-0200wb-93-16911").unwrap_err();
        assert!(err.is_hash_unavailable());
        assert!(matches!(
            err,
            UuidError::HashAlgorithmUnavailable { algorithm: "SHA-1" }
        ));
    }

    #[test]
    fn test_borrowed_hasher() {
        let hasher = Sha1Hasher;
        let generator = UuidGenerator::with_hasher("clueweb12", &hasher);
        assert_eq!(
            generator.try_generate("clueweb12-0200wb-93-16911").unwrap(),
            derive("clueweb12", "clueweb12-0200wb-93-16911")
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(UuidGenerator::new("clueweb12"));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    let internal_id = format!("clueweb12-{i:04}");
                    (generator.generate(&internal_id), derive("clueweb12", &internal_id))
                })
            })
            .collect();

        for handle in handles {
            let (bound, free) = handle.join().unwrap();
            assert_eq!(bound, free);
        }
    }
}
