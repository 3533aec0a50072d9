use thiserror::Error;

use super::NodeShape;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StructureError {
    #[error("the paths file is incorrectly formatted. {0} Each node maps one alias to a list holding its path and any child nodes.")]
    MalformedNode(NodeShape),

    #[error("duplicate alias \"{0}\" defined in paths file")]
    DuplicateAlias(String),

    #[error("duplicate path variable names defined for path string \"{0}\"")]
    DuplicateVariable(String),

    #[error("cannot expand '~': home directory of the current user is unknown")]
    HomeDirectoryUnavailable,
}
