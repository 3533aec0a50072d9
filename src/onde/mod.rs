//! The alias table loaded from a paths file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::resolve::{resolve, PathArgs, ResolveError};
use crate::source::{load_paths_file, locate_paths_file, RawValue, PATHS_FILE_ENV};
use crate::structure::{AliasedPath, DirectoryTable, Expander};
use crate::Error;

/// Aliased paths expanded from a paths document.
///
/// The document is expanded once at build time; lookups are plain reads.
///
/// ## Example
///
/// ```no_run
/// use onde::{Onde, PathArgs};
///
/// let onde = Onde::builder()
///     .with_file("paths.yml")
///     .build()?;
///
/// for alias in onde.aliases() {
///     println!("{alias}");
/// }
///
/// let report = onde.path("report", &PathArgs::new().named("year", "2024"))?;
/// println!("{report}");
/// # Ok::<(), onde::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Onde {
    table: DirectoryTable,
}

impl Onde {
    /// Creates a new builder for constructing an `Onde`.
    pub fn builder() -> OndeBuilder {
        OndeBuilder::default()
    }

    /// Sorted list of every alias.
    pub fn aliases(&self) -> Vec<&str> {
        self.table.aliases()
    }

    /// Alias to unsubstituted path template.
    pub fn paths(&self) -> BTreeMap<&str, &str> {
        self.table.paths()
    }

    /// All aliased paths in document order.
    pub fn entries(&self) -> &[AliasedPath] {
        self.table.entries()
    }

    pub fn table(&self) -> &DirectoryTable {
        &self.table
    }

    /// Resolves `alias` to a path, filling its placeholders from `args`.
    pub fn path(&self, alias: &str, args: &PathArgs) -> Result<String, ResolveError> {
        resolve(&self.table, alias, args)
    }
}

/// Builder for constructing an [`Onde`].
///
/// Without an explicit file or document, the paths file is taken from the
/// `ONDEFILE_PATH` environment variable, falling back to `paths.yml` in the
/// working directory.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct OndeBuilder {
    file: Option<PathBuf>,
    env_var: String,
    document: Option<RawValue>,
    home: Option<PathBuf>,
}

impl Default for OndeBuilder {
    fn default() -> Self {
        Self {
            file: None,
            env_var: PATHS_FILE_ENV.to_string(),
            document: None,
            home: None,
        }
    }
}

impl OndeBuilder {
    /// Loads the given paths file. `.toml` files are TOML, anything else YAML.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Names the environment variable consulted when no file is given.
    pub fn with_env(mut self, var: impl Into<String>) -> Self {
        self.env_var = var.into();
        self
    }

    /// Uses an already parsed document instead of reading a file.
    pub fn with_document(mut self, document: RawValue) -> Self {
        self.document = Some(document);
        self
    }

    /// Overrides the directory a leading `~` expands to.
    ///
    /// Defaults to the current user's home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Loads and expands the paths document.
    pub fn build(self) -> Result<Onde, Error> {
        let document = match self.document {
            Some(document) => document,
            None => {
                let path = locate_paths_file(self.file.as_deref(), &self.env_var);
                load_paths_file(&path)?
            }
        };

        let home = self.home.or_else(dirs::home_dir);
        let table = Expander::new(home).expand(&document)?;
        info!(aliases = table.len(), "expanded paths document");

        Ok(Onde { table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{parse_yaml, LoadError};
    use crate::structure::{NodeShape, StructureError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"
- alias_1: [test/foo]
- alias_2:
    - test/bar
    - alias_3: ["{dir_name}/{file_name}.txt"]
"#;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn scenario() -> Onde {
        let file = temp_file(".yml", SCENARIO);
        Onde::builder().with_file(file.path()).build().unwrap()
    }

    #[test]
    fn test_paths_file_passed_as_argument() {
        let file = temp_file(".yml", "- alias_1: [test/foo]\n");
        let onde = Onde::builder().with_file(file.path()).build().unwrap();

        assert_eq!(onde.paths(), BTreeMap::from([("alias_1", "test/foo")]));
        assert_eq!(onde.aliases(), ["alias_1"]);
    }

    #[test]
    fn test_reads_paths_yml_from_working_directory() {
        // Uses the paths.yml at the crate root.
        let onde = Onde::builder()
            .with_env("ONDE_TEST_VARIABLE_THAT_IS_NEVER_SET")
            .build()
            .unwrap();

        assert!(onde.aliases().contains(&"main"));
        assert_eq!(onde.paths().get("main"), Some(&"src/lib.rs"));
    }

    #[test]
    fn test_aliases_lists_aliases() {
        assert_eq!(scenario().aliases(), ["alias_1", "alias_2", "alias_3"]);
    }

    #[test]
    fn test_paths_lists_paths() {
        assert_eq!(
            scenario().paths(),
            BTreeMap::from([
                ("alias_1", "test/foo"),
                ("alias_2", "test/bar"),
                ("alias_3", "test/bar/{dir_name}/{file_name}.txt"),
            ])
        );
    }

    #[test]
    fn test_entries_keep_document_order() {
        let onde = scenario();
        let aliases: Vec<_> = onde.entries().iter().map(AliasedPath::alias).collect();
        assert_eq!(aliases, ["alias_1", "alias_2", "alias_3"]);
    }

    #[test]
    fn test_path_returns_path() {
        assert_eq!(scenario().path("alias_1", &PathArgs::new()).unwrap(), "test/foo");
    }

    #[test]
    fn test_path_with_named_args() {
        let args = PathArgs::new()
            .named("dir_name", "test_dir")
            .named("file_name", "test_file");
        assert_eq!(
            scenario().path("alias_3", &args).unwrap(),
            "test/bar/test_dir/test_file.txt"
        );
    }

    #[test]
    fn test_path_with_positional_args() {
        let args = PathArgs::positional(["test_dir", "test_file"]);
        assert_eq!(
            scenario().path("alias_3", &args).unwrap(),
            "test/bar/test_dir/test_file.txt"
        );
    }

    #[test]
    fn test_path_with_too_many_positional_args() {
        let args = PathArgs::positional(["test_dir", "test_file", "something_extra"]);
        let result = scenario().path("alias_3", &args);

        assert!(matches!(result, Err(ResolveError::TooManyArguments { .. })));
    }

    #[test]
    fn test_unknown_alias() {
        let result = scenario().path("missing", &PathArgs::new());
        assert!(matches!(result, Err(ResolveError::UnknownAlias { .. })));
    }

    #[test]
    fn test_toml_paths_file() {
        let file = temp_file(
            ".toml",
            r#"
            [[paths]]
            alias_1 = ["test/foo"]

            [[paths]]
            alias_2 = ["test/bar", { alias_3 = ["{dir_name}/{file_name}.txt"] }]
            "#,
        );
        let onde = Onde::builder().with_file(file.path()).build().unwrap();

        assert_eq!(onde.paths(), scenario().paths());
    }

    #[test]
    fn test_document_and_home_override() {
        let document = parse_yaml("- notes: [~/notes]").unwrap();
        let onde = Onde::builder()
            .with_document(document)
            .with_home("/home/tester")
            .build()
            .unwrap();

        assert_eq!(onde.paths().get("notes"), Some(&"/home/tester/notes"));
    }

    #[test]
    fn test_missing_file() {
        let result = Onde::builder()
            .with_file("/nonexistent/path/paths.yml")
            .build();

        assert!(matches!(
            result,
            Err(Error::Load(LoadError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let file = temp_file(".yml", "- {}\n");
        let result = Onde::builder().with_file(file.path()).build();

        assert!(matches!(
            result,
            Err(Error::Structure(StructureError::MalformedNode(
                NodeShape::EmptyMapping
            )))
        ));
    }

    #[test]
    fn test_resolve_error_converts_to_error() {
        fn lookup(onde: &Onde) -> Result<String, Error> {
            Ok(onde.path("alias_3", &PathArgs::new())?)
        }

        let err = lookup(&scenario()).unwrap_err();
        assert!(matches!(err, Error::Resolve(ResolveError::MissingVariables(_))));
    }
}
