//! Meaningful names for file and directory paths.
//!
//! A paths file declares a tree of aliased path fragments:
//!
//! ```yaml
//! - logs:
//!     - ~/var/log
//!     - daily: ["{year}/{day}.log"]
//! ```
//!
//! [`Onde`] expands the tree once into a flat alias table and resolves
//! aliases on demand, filling `{name}` placeholders from [`PathArgs`].
//!
//! ```no_run
//! use onde::{Onde, PathArgs};
//!
//! let onde = Onde::builder().with_file("paths.yml").build()?;
//! let path = onde.path("daily", &PathArgs::new().named("year", "2024").arg("03-01"))?;
//! println!("{path}");
//! # Ok::<(), onde::Error>(())
//! ```

mod error;
mod onde;
pub mod resolve;
pub mod source;
pub mod structure;
mod template;

pub use error::Error;
pub use onde::{Onde, OndeBuilder};
pub use resolve::{PathArgs, ResolveError};
pub use source::{LoadError, RawValue};
pub use structure::{AliasedPath, DirectoryTable, StructureError};
pub use template::Placeholder;
