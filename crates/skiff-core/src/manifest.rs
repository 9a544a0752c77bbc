//! Typed handling of the project's `package.json`.
//!
//! The manifest is parsed into a struct with explicit required and optional
//! fields rather than being treated as a free-form JSON object, so a missing
//! `name` or `version` fails at load time instead of propagating into the
//! staged output.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Entry file name written into every deployment manifest.
const DEPLOY_MAIN: &str = "index.js";
/// Declaration file name written into every deployment manifest.
const DEPLOY_TYPES: &str = "index.d.ts";

/// The project's `package.json`, reduced to the fields skiff consumes.
///
/// `name` and `version` are required; the remaining fields of the file are
/// ignored and never leak into derived output.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub engines: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,
}

impl PackageManifest {
    /// Load `package.json` from the project directory.
    ///
    /// # Errors
    ///
    /// - [`Error::ManifestRead`](crate::Error::ManifestRead) if the file cannot be read
    /// - [`Error::ManifestParse`](crate::Error::ManifestParse) if it is not valid JSON
    ///   or lacks a required field
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let path = project_dir.join("package.json");
        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::ManifestRead {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| crate::Error::ManifestParse { path, source: e })
    }
}

/// The reduced manifest written next to bundled output, consumed by the
/// hosting platform at deploy time.
///
/// Derived fresh from [`PackageManifest`] on every staging run; carries
/// exactly {name, version, engines, dependencies, main, types} and nothing
/// else. Optional fields absent from the source stay absent here.
#[derive(Debug, Clone, Serialize)]
pub struct DeployManifest {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    engines: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<BTreeMap<String, String>>,
    main: String,
    types: String,
}

impl DeployManifest {
    /// Derive the deployment manifest for one function.
    ///
    /// The package name gains the function name as a suffix so each deployed
    /// unit is identified independently.
    pub fn derive(manifest: &PackageManifest, function: &str) -> Self {
        Self {
            name: format!("{}-{}", manifest.name, function),
            version: manifest.version.clone(),
            engines: manifest.engines.clone(),
            dependencies: manifest.dependencies.clone(),
            main: DEPLOY_MAIN.to_owned(),
            types: DEPLOY_TYPES.to_owned(),
        }
    }

    /// Pretty-printed JSON, newline-terminated.
    pub fn to_json(&self) -> String {
        let mut out = serde_json::to_string_pretty(self)
            .expect("DeployManifest serialization cannot fail");
        out.push('\n');
        out
    }
}
