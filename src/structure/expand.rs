//! Depth-first expansion of configuration nodes into a [`DirectoryTable`].

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use tracing::debug;

use super::path::{escape_spaces, expand_home, join};
use super::{ConfigNode, StructureError};
use crate::source::RawValue;
use crate::template::{self, Placeholder};

/// An alias bound to its fully joined, escaped path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedPath {
    alias: String,
    path: String,
    placeholders: Vec<Placeholder>,
}

impl AliasedPath {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The unsubstituted path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Placeholders of the template, left to right.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }
}

/// Flat table of every aliased path declared in a paths document.
///
/// Entries keep document order. The table is only built by [`Expander`]
/// and is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTable {
    entries: Vec<AliasedPath>,
    index: HashMap<String, usize>,
}

impl DirectoryTable {
    pub fn get(&self, alias: &str) -> Option<&AliasedPath> {
        self.index.get(alias).map(|&i| &self.entries[i])
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[AliasedPath] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted list of every registered alias.
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.index.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Alias to unsubstituted path template.
    pub fn paths(&self) -> BTreeMap<&str, &str> {
        self.entries
            .iter()
            .map(|entry| (entry.alias(), entry.path()))
            .collect()
    }

    fn register(&mut self, alias: &str, path: String) -> Result<(), StructureError> {
        if self.index.contains_key(alias) {
            return Err(StructureError::DuplicateAlias(alias.to_string()));
        }

        let placeholders = template::scan(&path);
        let distinct: HashSet<&str> = placeholders.iter().map(|p| p.text(&path)).collect();
        if distinct.len() != placeholders.len() {
            return Err(StructureError::DuplicateVariable(path));
        }

        debug!(alias, path = %path, variables = placeholders.len(), "registered aliased path");
        self.index.insert(alias.to_string(), self.entries.len());
        self.entries.push(AliasedPath {
            alias: alias.to_string(),
            path,
            placeholders,
        });
        Ok(())
    }
}

/// Expands configuration trees into a [`DirectoryTable`].
///
/// Each node's fragment is joined onto its parent's path. A leading `~` is
/// replaced with the home directory and every space is escaped with a
/// backslash before the path is registered under the node's alias.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    home: Option<PathBuf>,
}

impl Expander {
    /// Creates an expander that resolves `~` to `home`.
    ///
    /// With no home directory, any path starting with `~` fails to expand.
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// Validates and expands a raw paths document.
    pub fn expand(&self, document: &RawValue) -> Result<DirectoryTable, StructureError> {
        let nodes = ConfigNode::parse_forest(document)?;
        self.expand_nodes(&nodes)
    }

    /// Expands already validated root nodes, sharing one alias namespace.
    pub fn expand_nodes(&self, roots: &[ConfigNode]) -> Result<DirectoryTable, StructureError> {
        let mut table = DirectoryTable::default();
        for node in roots {
            self.expand_node(&mut table, node, "")?;
        }
        Ok(table)
    }

    // Children inherit the unescaped path so spaces are escaped exactly once.
    fn expand_node(
        &self,
        table: &mut DirectoryTable,
        node: &ConfigNode,
        parent: &str,
    ) -> Result<(), StructureError> {
        let joined = join(parent, &node.fragment);
        let joined = expand_home(&joined, self.home.as_deref())?;

        table.register(&node.alias, escape_spaces(&joined))?;

        for child in &node.children {
            self.expand_node(table, child, &joined)?;
        }
        Ok(())
    }
}
