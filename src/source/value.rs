//! Format-neutral document model.

/// A parsed paths document, independent of the file format it came from.
///
/// Mappings keep their entries in document order. Leaves that are not
/// strings (numbers, booleans, null, dates) are kept as [`RawValue::Scalar`]
/// with their textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    String(String),
    Sequence(Vec<RawValue>),
    Mapping(Vec<(RawValue, RawValue)>),
    Scalar(String),
}

impl RawValue {
    /// Short description of the value's kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::String(_) => "string",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
            RawValue::Scalar(_) => "scalar",
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::String(s) => RawValue::String(s),
            Value::Sequence(items) => {
                RawValue::Sequence(items.into_iter().map(RawValue::from).collect())
            }
            Value::Mapping(mapping) => RawValue::Mapping(
                mapping
                    .into_iter()
                    .map(|(k, v)| (RawValue::from(k), RawValue::from(v)))
                    .collect(),
            ),
            // Tags carry no meaning for paths documents
            Value::Tagged(tagged) => RawValue::from(tagged.value),
            Value::Null => RawValue::Scalar("null".to_string()),
            Value::Bool(b) => RawValue::Scalar(b.to_string()),
            Value::Number(n) => RawValue::Scalar(n.to_string()),
        }
    }
}

impl From<toml::Value> for RawValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => RawValue::String(s),
            Value::Array(items) => {
                RawValue::Sequence(items.into_iter().map(RawValue::from).collect())
            }
            Value::Table(table) => RawValue::Mapping(
                table
                    .into_iter()
                    .map(|(k, v)| (RawValue::String(k), RawValue::from(v)))
                    .collect(),
            ),
            Value::Integer(i) => RawValue::Scalar(i.to_string()),
            Value::Float(f) => RawValue::Scalar(f.to_string()),
            Value::Boolean(b) => RawValue::Scalar(b.to_string()),
            Value::Datetime(dt) => RawValue::Scalar(dt.to_string()),
        }
    }
}
