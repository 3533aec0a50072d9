use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::DEFAULT_PATHS_FILE;

/// Environment variable naming the paths file when none is given explicitly.
pub const PATHS_FILE_ENV: &str = "ONDEFILE_PATH";

/// Decides which paths file to load.
///
/// An explicit path wins, then the value of the `env_var` environment
/// variable, then [`DEFAULT_PATHS_FILE`] in the working directory. An empty
/// variable counts as unset.
pub fn locate_paths_file(explicit: Option<&Path>, env_var: &str) -> PathBuf {
    let located = locate(explicit, std::env::var_os(env_var));
    debug!(path = %located.display(), env_var, "located paths file");
    located
}

fn locate(explicit: Option<&Path>, from_env: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match from_env {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_PATHS_FILE),
    }
}
