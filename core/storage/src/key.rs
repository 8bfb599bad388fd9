//! Deterministic object-key derivation.
//!
//! Keys are derived purely from upload metadata, so the same file always
//! addresses the same object and delete never needs a stored reference.

use serde::{Deserialize, Serialize};
use std::fmt;

use medialift_common::UploadFile;

/// Key of an object within a bucket.
///
/// Always has the shape `{directory}/{slug}{ext}` where `directory` is the
/// caller-supplied path or the content hash, `slug` contains only letters,
/// digits and hyphens, and `ext` is lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slugify the base name and append the lowercased extension.
///
/// When the base name slugifies to nothing (a file named just its
/// extension, or a name of only symbols), the content hash is used as the
/// base so keys never collapse to a bare extension.
pub fn slugify_filename(file: &UploadFile) -> String {
    let slug = slug::slugify(file.stem());
    let base = if slug.is_empty() {
        file.hash.as_str()
    } else {
        slug.as_str()
    };
    format!("{}{}", base, file.ext.to_lowercase())
}

/// Derive the full object key for an upload.
///
/// The directory segment is the caller-supplied `path` when present and
/// non-empty, otherwise the content hash. Deterministic: the same
/// `path`/`hash`/`name`/`ext` always yields the same key.
pub fn object_key(file: &UploadFile) -> ObjectKey {
    ObjectKey(format!("{}/{}", file.directory(), slugify_filename(file)))
}
