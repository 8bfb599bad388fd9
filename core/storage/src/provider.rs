//! Upload provider trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use medialift_common::{Result, UploadFile};

use crate::key::ObjectKey;

/// Result of a successful upload.
///
/// Providers return the derived key and public URL as a value instead of
/// mutating the caller's `UploadFile`; [`UploadedObject::apply_to`] writes
/// the URL back for hosts that keep the field-mutation contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedObject {
    /// Object key the payload was stored under.
    pub key: ObjectKey,
    /// Publicly fetchable URL of the stored object.
    pub url: String,
}

impl UploadedObject {
    /// Write the public URL back into the upload request.
    pub fn apply_to(&self, file: &mut UploadFile) {
        file.url = Some(self.url.clone());
    }
}

/// Kind of a provider configuration field, for the hosting CMS settings UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input (e.g. a pasted JSON document).
    TextArea,
}

/// A single configuration field a provider requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    /// Key under which the value arrives in the configuration object.
    pub key: String,
    /// Human-readable label shown in the settings UI.
    pub label: String,
    /// Input kind.
    pub kind: FieldKind,
}

impl ConfigField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Descriptor the hosting CMS uses to render provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Machine id of the provider (matches registry name).
    pub id: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Configuration fields required at initialization.
    pub fields: Vec<ConfigField>,
}

/// Upload provider trait for different storage backends.
///
/// All operations are async. Providers hold only immutable configuration
/// (bucket name, authenticated client handle) fixed at construction, so
/// concurrent calls for different keys are independent and safe.
#[async_trait]
pub trait UploadProvider: Send + Sync {
    /// Get the provider name (e.g. "gcs", "memory").
    fn name(&self) -> &str;

    /// Describe the provider and its configuration surface.
    fn descriptor(&self) -> ProviderDescriptor;

    /// Store the file's payload under its derived object key.
    ///
    /// # Postconditions
    /// - The object is stored with content type `file.mime`, public-read
    ///   visibility and an inline content disposition naming the original
    ///   file
    /// - Returns the derived key and the public URL
    ///
    /// # Errors
    /// - Network/backend errors propagate unchanged; no retries happen at
    ///   this layer
    async fn upload(&self, file: &UploadFile) -> Result<UploadedObject>;

    /// Delete the object addressed by the file's derived key.
    ///
    /// The key is recomputed from `file`; callers must supply the same
    /// `path`/`hash`/`name`/`ext` used at upload time.
    ///
    /// # Postconditions
    /// - Deleting an already-absent object succeeds with a logged warning
    ///
    /// # Errors
    /// - Any failure other than not-found propagates unchanged
    async fn delete(&self, file: &UploadFile) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::object_key;

    #[test]
    fn test_apply_to_writes_url_back() {
        let mut file = UploadFile {
            name: "photo.png".to_string(),
            ext: ".png".to_string(),
            hash: "abc123".to_string(),
            path: None,
            buffer: vec![0u8; 4],
            mime: "image/png".to_string(),
            url: None,
        };

        let uploaded = UploadedObject {
            key: object_key(&file),
            url: "https://storage.googleapis.com/my-bucket/abc123/photo.png".to_string(),
        };

        uploaded.apply_to(&mut file);
        assert_eq!(file.url.as_deref(), Some(uploaded.url.as_str()));
    }

    #[test]
    fn test_descriptor_serialization() {
        let descriptor = ProviderDescriptor {
            id: "gcs".to_string(),
            display_name: "Google Cloud Storage".to_string(),
            fields: vec![
                ConfigField::new("serviceAccount", "Service Account JSON", FieldKind::TextArea),
                ConfigField::new("bucket", "Bucket", FieldKind::Text),
            ],
        };

        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"textarea\""));

        let parsed: ProviderDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, descriptor.id);
        assert_eq!(parsed.fields.len(), 2);
    }
}
