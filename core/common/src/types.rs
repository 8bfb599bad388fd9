//! Common types used throughout MediaLift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file handed over by the hosting CMS for storage.
///
/// This is a transient value: the CMS builds it from an incoming upload,
/// a provider stores the payload and hands back the public URL. The field
/// names mirror the wire shape the CMS uses (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    /// Original filename, including extension (e.g. `"My Photo!.png"`).
    pub name: String,
    /// File extension with leading dot (e.g. `".png"`). Case is preserved
    /// here; providers lowercase it when deriving keys.
    pub ext: String,
    /// Content-derived or random identifier, used as the default directory
    /// segment when no explicit `path` is given.
    pub hash: String,
    /// Optional pre-existing directory segment supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Raw byte payload.
    #[serde(default)]
    pub buffer: Vec<u8>,
    /// Content type (e.g. `"image/png"`).
    pub mime: String,
    /// Public URL, written back after a successful upload for callers that
    /// keep the field-mutation contract. Providers return the URL as a value;
    /// this slot exists for compatibility with the hosting CMS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UploadFile {
    /// Effective directory segment: explicit `path` when present and
    /// non-empty, otherwise the content hash.
    pub fn directory(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => &self.hash,
        }
    }

    /// Original base name with the extension stripped.
    pub fn stem(&self) -> &str {
        self.name
            .strip_suffix(self.ext.as_str())
            .unwrap_or(&self.name)
    }
}

impl fmt::Display for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> UploadFile {
        UploadFile {
            name: "photo.png".to_string(),
            ext: ".png".to_string(),
            hash: "abc123".to_string(),
            path: None,
            buffer: vec![1, 2, 3],
            mime: "image/png".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_directory_falls_back_to_hash() {
        let file = photo();
        assert_eq!(file.directory(), "abc123");
    }

    #[test]
    fn test_directory_prefers_path() {
        let mut file = photo();
        file.path = Some("avatars".to_string());
        assert_eq!(file.directory(), "avatars");
    }

    #[test]
    fn test_empty_path_falls_back_to_hash() {
        let mut file = photo();
        file.path = Some(String::new());
        assert_eq!(file.directory(), "abc123");
    }

    #[test]
    fn test_stem_strips_extension() {
        let file = photo();
        assert_eq!(file.stem(), "photo");
    }

    #[test]
    fn test_stem_without_matching_extension() {
        let mut file = photo();
        file.name = "archive".to_string();
        file.ext = ".zip".to_string();
        assert_eq!(file.stem(), "archive");
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let mut file = photo();
        file.path = Some("avatars".to_string());
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"mime\""));

        let parsed: UploadFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, file.name);
        assert_eq!(parsed.path, file.path);
        assert_eq!(parsed.buffer, file.buffer);
    }
}
