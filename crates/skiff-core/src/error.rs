use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Package manifest ──
    #[error("failed to read package manifest at {path}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse package manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ── Function discovery ──
    #[error("failed to read functions directory {path}")]
    FunctionsDirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no function named '{name}' — expected an entry point at {entry_point}")]
    UnknownFunction { name: String, entry_point: PathBuf },
}
