use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("paths file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read paths file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse YAML paths file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to parse TOML paths file '{path}': {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
