//! File-based paths documents.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{LoadError, RawValue};

/// File name looked up in the working directory when nothing else is configured.
pub const DEFAULT_PATHS_FILE: &str = "paths.yml";

/// Serialization format of a paths file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The root of the document is the list of nodes.
    Yaml,
    /// The root table holds the list of nodes under `paths`.
    Toml,
}

impl Format {
    /// Picks the format from the file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlPathsFile {
    paths: toml::Value,
}

/// Parses a YAML paths document.
pub fn parse_yaml(contents: &str) -> Result<RawValue, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    Ok(value.into())
}

/// Parses a TOML paths document.
///
/// ```toml
/// [[paths]]
/// alias_1 = ["test/foo"]
///
/// [[paths]]
/// alias_2 = ["test/bar", { alias_3 = ["{dir_name}/{file_name}.txt"] }]
/// ```
pub fn parse_toml(contents: &str) -> Result<RawValue, toml::de::Error> {
    let file: TomlPathsFile = toml::from_str(contents)?;
    Ok(file.paths.into())
}

/// Reads and parses the paths file at `path`.
pub fn load_paths_file(path: &Path) -> Result<RawValue, LoadError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(LoadError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let format = Format::from_path(path);
    debug!(path = %path.display(), ?format, "loading paths file");

    match format {
        Format::Yaml => parse_yaml(&contents).map_err(|e| LoadError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        }),
        Format::Toml => parse_toml(&contents).map_err(|e| LoadError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
