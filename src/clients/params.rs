//! Typed request parameters.
//!
//! Parameters are an ordered bag of `key -> ParamValue`. The order in which
//! keys are inserted is the order in which they appear in the query string.
//!
//! How a key is serialized is decided once, by [`KeyEncoding::classify`]:
//!
//! | key                    | encoding                                       |
//! |------------------------|------------------------------------------------|
//! | contains `range`       | [`KeyEncoding::Range`]: `key=lo&key=hi`        |
//! | starts with `batch_`   | [`KeyEncoding::Batch`]: camelCased, repeated   |
//! | anything else          | [`KeyEncoding::Plain`]                         |
//!
//! # Example
//!
//! ```rust
//! use hubspot_legacy::clients::{KeyEncoding, Params};
//!
//! let params = Params::new()
//!     .with("email", "email@address.com")
//!     .with("batch_list_id", vec![1, 2, 3]);
//!
//! assert_eq!(params.len(), 2);
//! assert_eq!(
//!     KeyEncoding::classify("batch_list_id"),
//!     KeyEncoding::Batch("listId".to_string())
//! );
//! ```

use std::fmt;
use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, Utc};

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamScalar {
    /// Free text, escaped on output.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean, written as `true`/`false`.
    Bool(bool),
    /// A point in time, written as epoch milliseconds in query strings.
    Time(DateTime<Utc>),
}

impl ParamScalar {
    /// Encodes the value for use in a query string.
    ///
    /// Times become whole epoch seconds multiplied by 1000; everything else
    /// is escaped in its string form.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Time(time) => (time.timestamp() * 1000).to_string(),
            other => escape(&other.to_string()),
        }
    }
}

impl fmt::Display for ParamScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            // whole floats keep their fraction: `1.0`, not `1`
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Time(time) => f.write_str(&time.to_rfc3339()),
        }
    }
}

/// The value side of a parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A single value.
    Scalar(ParamScalar),
    /// Several values, emitted as repeated keys.
    Sequence(Vec<ParamScalar>),
    /// A bounded range, required by range-encoded keys.
    Range(ParamScalar, ParamScalar),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Sequence(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Range(start, end) => write!(f, "{start}..{end}"),
        }
    }
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParamScalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_conversions! {
    &str => Text,
    String => Text,
    &String => Text,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    f64 => Float,
    bool => Bool,
    DateTime<Utc> => Time,
}

impl From<ParamScalar> for ParamValue {
    fn from(value: ParamScalar) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<ParamScalar>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamScalar>> From<Range<T>> for ParamValue {
    fn from(range: Range<T>) -> Self {
        Self::Range(range.start.into(), range.end.into())
    }
}

impl<T: Into<ParamScalar>> From<RangeInclusive<T>> for ParamValue {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::Range(start.into(), end.into())
    }
}

/// How a parameter key is written into the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyEncoding {
    /// Written as-is; sequences repeat the key.
    Plain,
    /// The value must be a range; the key is written twice.
    Range,
    /// Written under the given camelCased name; sequences repeat the key.
    Batch(String),
}

impl KeyEncoding {
    /// Classifies a parameter key.
    ///
    /// Range detection wins over the `batch_` prefix.
    #[must_use]
    pub fn classify(key: &str) -> Self {
        if key.contains("range") {
            Self::Range
        } else if let Some(rest) = key.strip_prefix("batch_") {
            Self::Batch(camelize(rest))
        } else {
            Self::Plain
        }
    }
}

/// Converts `snake_case` to `camelCase` (`list_id` -> `listId`).
fn camelize(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.next() {
                Some(next) => result.extend(next.to_uppercase()),
                None => result.push('_'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Escapes a value for paths and query strings.
///
/// Unreserved characters pass through and spaces become `+`.
#[must_use]
pub fn escape(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// An ordered collection of request parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a parameter and returns the bag, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter.
    ///
    /// An existing key keeps its position and gets the new value; the old
    /// value is returned.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Removes a key and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
