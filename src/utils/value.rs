use std::fmt;

/// A value whose concrete type is only known at runtime.
///
/// Narrowing never panics: each accessor returns `None` when the variant does
/// not match.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Text(String),
    Integer(i64),
    Bytes(Vec<u8>),
}

impl SampleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SampleValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SampleValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SampleValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Name of the held variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            SampleValue::Text(_) => "text",
            SampleValue::Integer(_) => "integer",
            SampleValue::Bytes(_) => "bytes",
        }
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::Text(value.to_string())
    }
}

impl From<String> for SampleValue {
    fn from(value: String) -> Self {
        SampleValue::Text(value)
    }
}

impl From<i64> for SampleValue {
    fn from(value: i64) -> Self {
        SampleValue::Integer(value)
    }
}

impl From<Vec<u8>> for SampleValue {
    fn from(value: Vec<u8>) -> Self {
        SampleValue::Bytes(value)
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Text(text) => write!(f, "{}", text),
            SampleValue::Integer(value) => write!(f, "{}", value),
            SampleValue::Bytes(bytes) => write!(f, "{} bytes", bytes.len()),
        }
    }
}
