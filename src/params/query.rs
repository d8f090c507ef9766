//! Query string construction
//!
//! Required parameters are checked before any request is issued; optional
//! parameters that are absent are left out of the query string entirely
//! rather than sent empty.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Query parameters for a stats request, kept sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter, failing if the value is empty
    pub fn required(mut self, name: &str, value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(Error::missing(name));
        }
        self.params.insert(name.to_string(), value.to_string());
        Ok(self)
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn optional<T: Display>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.params.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Add a parameter unconditionally
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Display) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    /// Insert a parameter in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
