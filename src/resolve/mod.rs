//! Alias lookup and placeholder substitution.
//!
//! Substitution works over the placeholder positions recorded when the
//! table was built. Values are inserted literally and never re-scanned, so a
//! value that itself looks like `{name}` is left alone.

mod args;
mod error;

pub use args::PathArgs;
pub use error::ResolveError;

use tracing::trace;

use crate::structure::DirectoryTable;
use crate::template::Placeholder;

/// Resolves `alias` to a concrete path, filling every placeholder from `args`.
///
/// Named arguments are applied first. Positional arguments then fill the
/// placeholders left over, in order of appearance. Supplying more positional
/// arguments than there are placeholders left is an error, as is leaving any
/// placeholder unfilled.
pub fn resolve(
    table: &DirectoryTable,
    alias: &str,
    args: &PathArgs,
) -> Result<String, ResolveError> {
    let entry = table.get(alias).ok_or_else(|| ResolveError::UnknownAlias {
        alias: alias.to_string(),
    })?;

    trace!(alias, template = entry.path(), "resolving path");
    substitute(entry.path(), entry.placeholders(), args)
}

fn substitute(
    template: &str,
    placeholders: &[Placeholder],
    args: &PathArgs,
) -> Result<String, ResolveError> {
    let mut fills: Vec<Option<&str>> = placeholders
        .iter()
        .map(|p| args.named_value(p.name(template)))
        .collect();

    let available = fills.iter().filter(|fill| fill.is_none()).count();
    if args.positional_len() > available {
        return Err(ResolveError::TooManyArguments {
            supplied: args.positional_len(),
            available,
        });
    }

    let open = fills.iter_mut().filter(|fill| fill.is_none());
    for (fill, value) in open.zip(args.positional_values()) {
        *fill = Some(value);
    }

    let missing: Vec<String> = placeholders
        .iter()
        .zip(&fills)
        .filter(|(_, fill)| fill.is_none())
        .map(|(p, _)| p.text(template).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ResolveError::MissingVariables(missing));
    }

    let mut resolved = String::with_capacity(template.len());
    let mut cursor = 0;
    for (placeholder, value) in placeholders.iter().zip(fills.into_iter().flatten()) {
        let span = placeholder.span();
        resolved.push_str(&template[cursor..span.start]);
        resolved.push_str(value);
        cursor = span.end;
    }
    resolved.push_str(&template[cursor..]);

    Ok(resolved)
}
