//! Core types and configuration for skiff.
//!
//! This crate defines the `skiff.toml` schema ([`SkiffConfig`]), the typed
//! Node package manifest ([`PackageManifest`]) and its deployment derivation
//! ([`DeployManifest`]), build-target discovery ([`FunctionTarget`]), and
//! shared error types.

pub mod config;
pub mod error;
pub mod manifest;
pub mod target;

pub use config::{BundleConfig, DeclarationsConfig, ProjectConfig, SkiffConfig, StageConfig};
pub use error::{Error, Result};
pub use manifest::{DeployManifest, PackageManifest};
pub use target::FunctionTarget;
