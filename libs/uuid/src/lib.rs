//! # webis-uuid
//!
//! Name-based (version 5) UUIDs for records in generated web corpora.
//!
//! ## Design Principles
//!
//! - UUIDs are derived, never allocated: no registry, no coordination
//! - The same `(prefix, internal_id)` always yields the same UUID
//! - All UUIDs live in the RFC 4122 `NameSpace_URL` namespace
//! - A missing SHA-1 backend is an error, never a zero UUID
//!
//! ## Name Format
//!
//! The hashed name is `{prefix}:{internal_id}`, where the prefix names the
//! scheme and the internal ID is only unique within that scheme.
//!
//! Examples:
//! - `clueweb09:clueweb09-en0001-02-21241`
//! - `clueweb12:clueweb12-0200wb-93-16911`
//!
//! ```
//! let id = webis_uuid::derive("clueweb12", "clueweb12-0200wb-93-16911");
//! assert_eq!(id, "7f476110-58fd-5698-b104-8b29c3ac6d55");
//!
//! let generator = webis_uuid::UuidGenerator::new("clueweb12");
//! assert_eq!(generator.generate("clueweb12-0200wb-93-16911"), id);
//! ```

mod derive;
mod error;
mod generator;
mod hasher;
mod namespace;
mod record;

pub use derive::{canonical_name, derive, derive_uuid};
pub use error::UuidError;
pub use generator::UuidGenerator;
pub use hasher::{NameHasher, Sha1Hasher, DIGEST_LEN};
pub use namespace::NAMESPACE_URL;
pub use record::RecordUuid;
