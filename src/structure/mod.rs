//! Expansion of the nested paths document into a flat alias table.

mod error;
mod expand;
mod node;
mod path;

pub use error::StructureError;
pub use expand::{AliasedPath, DirectoryTable, Expander};
pub use node::{ConfigNode, NodeShape};
