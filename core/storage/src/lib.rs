//! Upload-provider abstraction for MediaLift.
//!
//! This module provides a trait-based interface for the storage backends a
//! hosting CMS can route file uploads to (Google Cloud Storage, in-memory)
//! and a provider registry for dynamic provider resolution.
//!
//! # Design Principles
//! - Provider isolation: no backend-specific logic leaks into the hosting CMS
//! - Async operations: all I/O operations are async
//! - Deterministic addressing: object keys are derived from file metadata,
//!   so delete never needs a persisted reference
//! - Unified error semantics: consistent error types across providers

pub mod gcs;
pub mod key;
pub mod memory;
pub mod provider;
pub mod registry;

pub use gcs::{create_gcs_provider, GcsConfig, GcsProvider};
pub use key::{object_key, slugify_filename, ObjectKey};
pub use memory::MemoryProvider;
pub use provider::{ConfigField, FieldKind, ProviderDescriptor, UploadProvider, UploadedObject};
pub use registry::{create_default_registry, ProviderFactory, ProviderRegistry};
