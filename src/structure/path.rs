//! String-level path joining, home expansion and escaping.

use std::path::Path;

use super::StructureError;

/// Joins two path strings with exactly one `/` at the junction.
pub fn join(parent: &str, fragment: &str) -> String {
    if parent.is_empty() {
        return fragment.to_string();
    }
    format!(
        "{}/{}",
        parent.trim_end_matches('/'),
        fragment.trim_start_matches('/')
    )
}

/// Replaces a leading `~` with `home`.
///
/// Only a `~` at the very start is expanded. `~/rest` and `~rest` both
/// become `home/rest`.
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<String, StructureError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };
    let home = home.ok_or(StructureError::HomeDirectoryUnavailable)?;
    let home = home.to_string_lossy();

    let rest = rest.strip_prefix('/').unwrap_or(rest);
    if rest.is_empty() {
        Ok(home.into_owned())
    } else {
        Ok(join(&home, rest))
    }
}

/// Prefixes every space with a backslash.
pub fn escape_spaces(path: &str) -> String {
    path.replace(' ', "\\ ")
}
