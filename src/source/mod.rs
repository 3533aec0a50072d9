//! Paths file location and parsing.

mod env;
mod error;
mod file;
mod value;

pub use env::{locate_paths_file, PATHS_FILE_ENV};
pub use error::LoadError;
pub use file::{load_paths_file, parse_toml, parse_yaml, Format, DEFAULT_PATHS_FILE};
pub use value::RawValue;
