use std::collections::BTreeMap;

/// Arguments for filling the placeholders of a path template.
///
/// Named arguments fill placeholders with a matching name. Positional
/// arguments then fill the remaining placeholders from left to right.
///
/// ```
/// use onde::PathArgs;
///
/// let args = PathArgs::new().named("dir_name", "logs").arg("today");
/// assert_eq!(args.positional_len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl PathArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates arguments from positional values only.
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }

    /// Appends a positional value.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets the value for the `{name}` placeholder, replacing any earlier value.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    pub(crate) fn named_value(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    pub(crate) fn positional_values(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for PathArgs
where
    K: Into<String>,
    V: Into<String>,
{
    /// Collects named arguments.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(PathArgs::new(), |args, (name, value)| args.named(name, value))
    }
}
