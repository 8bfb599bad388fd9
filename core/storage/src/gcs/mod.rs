//! Google Cloud Storage upload provider for MediaLift.
//!
//! This module provides an upload backend using the Cloud Storage JSON API
//! with:
//! - Service-account authentication (JWT-bearer grant) with token caching
//! - Public-read uploads with content-type and inline content disposition
//! - Deterministic key-based deletes with a non-fatal not-found path

pub mod auth;
pub mod client;
pub mod provider;

pub use auth::{ServiceAccountKey, TokenManager};
pub use client::{GcsClient, ObjectResource};
pub use provider::{create_gcs_provider, GcsConfig, GcsEndpoints, GcsProvider};
