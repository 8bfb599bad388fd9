//! In-memory upload provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use medialift_common::{Result, UploadFile};

use crate::key::object_key;
use crate::provider::{
    ConfigField, FieldKind, ProviderDescriptor, UploadProvider, UploadedObject,
};

/// A stored object with the headers the backend would persist.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Payload bytes.
    pub data: Vec<u8>,
    /// Stored content type.
    pub content_type: String,
    /// Stored content disposition.
    pub content_disposition: String,
}

/// In-memory upload provider.
///
/// Useful for testing and development. Honors the same key derivation, URL
/// shape and delete contract as the real backends; all data is lost on drop.
pub struct MemoryProvider {
    bucket: String,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryProvider {
    /// Create a new empty provider with the given bucket name.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Check whether an object exists under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.read().unwrap().contains_key(key)
    }

    /// Get a stored object by key.
    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().unwrap().get(key).cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().unwrap().is_empty()
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl UploadProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn descriptor(&self) -> ProviderDescriptor {
        ProviderDescriptor {
            id: "memory".to_string(),
            display_name: "In-Memory".to_string(),
            fields: vec![ConfigField::new("bucket", "Bucket", FieldKind::Text)],
        }
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadedObject> {
        let key = object_key(file);

        let stored = StoredObject {
            data: file.buffer.clone(),
            content_type: file.mime.clone(),
            content_disposition: format!("inline; filename=\"{}\"", file.name),
        };

        self.objects
            .write()
            .unwrap()
            .insert(key.as_str().to_string(), stored);

        let url = format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket,
            key.as_str()
        );
        tracing::debug!(url = %url, "Uploaded object");

        Ok(UploadedObject { key, url })
    }

    async fn delete(&self, file: &UploadFile) -> Result<()> {
        let key = object_key(file);

        let removed = self.objects.write().unwrap().remove(key.as_str());
        match removed {
            Some(_) => {
                tracing::debug!(key = %key, "Deleted object");
            }
            None => {
                tracing::warn!(
                    key = %key,
                    "Remote object not found, it may need manual cleanup"
                );
            }
        }

        Ok(())
    }
}
