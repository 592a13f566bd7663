//! Value objects shared across the domain.

use std::fmt;

/// A configuration field whose value may not be decided yet.
///
/// Desired configuration arrives with three distinct states per field:
///
/// - [`FieldValue::Unknown`]: the value will be computed or resolved later
///   (for example an organization that should fall back to the default).
/// - [`FieldValue::Null`]: the caller explicitly left the field unset.
/// - [`FieldValue::Value`]: a concrete, known value.
///
/// Only `Value` carries an opinion. Code that compares or merges fields must
/// match on the tag instead of collapsing the three states into an `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FieldValue<T> {
    #[default]
    Unknown,
    Null,
    Value(T),
}

impl<T> FieldValue<T> {
    /// `true` only for [`FieldValue::Value`].
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the known value, if any.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unknown | Self::Null => None,
        }
    }

    /// Consume into the known value, if any.
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unknown | Self::Null => None,
        }
    }

    pub fn as_ref(&self) -> FieldValue<&T> {
        match self {
            Self::Unknown => FieldValue::Unknown,
            Self::Null => FieldValue::Null,
            Self::Value(v) => FieldValue::Value(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldValue<U> {
        match self {
            Self::Unknown => FieldValue::Unknown,
            Self::Null => FieldValue::Null,
            Self::Value(v) => FieldValue::Value(f(v)),
        }
    }
}

impl<T> From<Option<T>> for FieldValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl From<&str> for FieldValue<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for FieldValue<String> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Display> fmt::Display for FieldValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("(known after apply)"),
            Self::Null => f.write_str("null"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Which lifecycle entry point produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that may never change once an application exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImmutableField {
    Name,
    Organization,
}

impl ImmutableField {
    /// Short label used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Organization => "org",
        }
    }
}

impl fmt::Display for ImmutableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
