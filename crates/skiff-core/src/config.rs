use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// skiff.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkiffConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub bundle: BundleConfig,
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub declarations: DeclarationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (defaults to the package.json name)
    pub name: Option<String>,
    /// Directory holding one subdirectory per function
    #[serde(default = "default_functions_dir")]
    pub functions_dir: String,
    /// Directory receiving per-function build output
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Bundler platform
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Runtime version the bundler targets
    #[serde(default = "default_target")]
    pub target: String,
    /// Output module format
    #[serde(default = "default_format")]
    pub format: String,
    /// Minify bundled output
    #[serde(default)]
    pub minify: bool,
    /// Emit source maps
    #[serde(default = "default_true")]
    pub sourcemap: bool,
    /// Emit build metadata alongside the bundle
    #[serde(default = "default_true")]
    pub metafile: bool,
    /// Package-name patterns left out of the bundle and installed at deploy time
    #[serde(default = "default_external")]
    pub external: Vec<String>,
    /// Import-path aliases, mirrored into the type-checker configuration
    #[serde(default = "default_alias")]
    pub alias: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Environment file copied into the output directory as `.env`
    #[serde(default = "default_env_file")]
    pub env_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationsConfig {
    /// Base type-checker configuration the temporary one extends
    #[serde(default = "default_base_config")]
    pub base_config: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            functions_dir: default_functions_dir(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            target: default_target(),
            format: default_format(),
            minify: false,
            sourcemap: true,
            metafile: true,
            external: default_external(),
            alias: default_alias(),
        }
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
        }
    }
}

impl Default for DeclarationsConfig {
    fn default() -> Self {
        Self {
            base_config: default_base_config(),
        }
    }
}

impl SkiffConfig {
    /// Load from skiff.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("skiff.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_functions_dir() -> String {
    "src".to_owned()
}

fn default_dist_dir() -> String {
    "dist".to_owned()
}

fn default_platform() -> String {
    "node".to_owned()
}

fn default_target() -> String {
    "node22".to_owned()
}

fn default_format() -> String {
    "cjs".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_external() -> Vec<String> {
    vec![
        "@google-cloud/*".to_owned(),
        "firebase-admin".to_owned(),
        "google-auth-library".to_owned(),
        "googleapis".to_owned(),
    ]
}

fn default_alias() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("~".to_owned(), "src".to_owned()),
        ("~config".to_owned(), "src/shared/config".to_owned()),
        ("~utils".to_owned(), "src/shared/utils".to_owned()),
    ])
}

fn default_env_file() -> String {
    ".env.prod".to_owned()
}

fn default_base_config() -> String {
    "tsconfig.json".to_owned()
}
