use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("no file or directory with the specified alias was found")]
    UnknownAlias { alias: String },

    #[error("too many path variable arguments: {supplied} positional given, {available} placeholders left to fill")]
    TooManyArguments { supplied: usize, available: usize },

    #[error("all path variables need to be specified, missing variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
}
