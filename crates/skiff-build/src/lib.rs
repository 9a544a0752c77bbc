//! Deployment staging and type-checker configuration for skiff.
//!
//! # Staging pipeline
//!
//! ```text
//! skiff stage <function>
//!   1. Output dir   ── create dist/<function>/ (idempotent)
//!   2. Manifest     ── package.json → DeployManifest → dist/<function>/package.json
//!   3. Aux files    ── .env.prod → .env, .npmrc, .gcloudignore (per-file outcomes)
//!   4. Validation   ── re-read each destination, report byte size
//! ```
//!
//! # Copy strategy
//!
//! The manifest write is fatal on failure; auxiliary copies are independent.
//! Each one yields its own [`CopyOutcome`](stage::CopyOutcome) so callers can
//! distinguish "some files missing" from "all files copied".
//!
//! # Temporary type-checker configuration
//!
//! [`TempTsconfig`](tsconfig::TempTsconfig) binds the generated configuration
//! to a scope: the file is removed when the value drops, whether the checker
//! succeeded or not.

pub mod stage;
pub mod tsconfig;

pub use stage::{CopyOutcome, CopyStatus, StageError, StageReport};
pub use tsconfig::{TempTsconfig, TsconfigGenerator};
