//! Validating parse of raw documents into configuration nodes.

use std::fmt;

use tracing::debug;

use super::StructureError;
use crate::source::RawValue;

/// The specific way a node in the document is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NodeShape {
    RootNotASequence,
    NotAMapping,
    EmptyMapping,
    MultipleAliases,
    AliasNotAString,
    MissingPathData,
    FragmentNotAString,
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = match self {
            NodeShape::RootNotASequence => "The top level should be a list of nodes.",
            NodeShape::NotAMapping => "Each node should be a dictionary with an alias as its key.",
            NodeShape::EmptyMapping => "Nodes cannot be empty.",
            NodeShape::MultipleAliases => "Each node should have exactly one alias.",
            NodeShape::AliasNotAString => "Aliases should be strings.",
            NodeShape::MissingPathData => {
                "Node data should be a list which includes a path (required) and child nodes (optional)."
            }
            NodeShape::FragmentNotAString => {
                "Each node needs to contain data about the directory that it describes."
            }
        };
        f.write_str(hint)
    }
}

/// One declared entry of the paths document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    pub alias: String,
    pub fragment: String,
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(alias: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            fragment: fragment.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ConfigNode::count).sum::<usize>()
    }

    /// Parses the document root, which must be a sequence of nodes.
    pub fn parse_forest(root: &RawValue) -> Result<Vec<Self>, StructureError> {
        let RawValue::Sequence(items) = root else {
            debug!(found = root.kind(), "paths document root is not a sequence");
            return Err(malformed(NodeShape::RootNotASequence));
        };
        items.iter().map(Self::parse).collect()
    }

    /// Parses a single `{alias: [fragment, child...]}` node and its subtree.
    pub fn parse(value: &RawValue) -> Result<Self, StructureError> {
        let RawValue::Mapping(entries) = value else {
            debug!(found = value.kind(), "node is not a mapping");
            return Err(malformed(NodeShape::NotAMapping));
        };

        let (key, data) = match entries.as_slice() {
            [] => return Err(malformed(NodeShape::EmptyMapping)),
            [(key, data)] => (key, data),
            _ => return Err(malformed(NodeShape::MultipleAliases)),
        };

        let RawValue::String(alias) = key else {
            return Err(malformed(NodeShape::AliasNotAString));
        };

        let RawValue::Sequence(items) = data else {
            debug!(alias = %alias, found = data.kind(), "node data is not a sequence");
            return Err(malformed(NodeShape::MissingPathData));
        };

        let (first, rest) = items
            .split_first()
            .ok_or_else(|| malformed(NodeShape::MissingPathData))?;

        let RawValue::String(fragment) = first else {
            return Err(malformed(NodeShape::FragmentNotAString));
        };

        let children = rest.iter().map(Self::parse).collect::<Result<_, _>>()?;

        Ok(Self {
            alias: alias.clone(),
            fragment: fragment.clone(),
            children,
        })
    }
}

fn malformed(shape: NodeShape) -> StructureError {
    StructureError::MalformedNode(shape)
}
