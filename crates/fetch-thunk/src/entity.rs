//! Entity names
//!
//! An entity is a named logical resource (e.g. "orders") whose fetch
//! lifecycle is tracked by whatever store consumes the dispatched actions.

use crate::error::{ENTITY_NAME_REQUIRED, FetchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Validated, non-empty entity name
///
/// Cloning is cheap: every action produced for one fetch shares the
/// same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(Arc<str>);

impl EntityName {
    /// Create a new entity name, rejecting empty strings
    pub fn new(name: impl Into<String>) -> Result<Self, FetchError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FetchError::InvalidArgument(ENTITY_NAME_REQUIRED));
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityName {
    type Error = FetchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EntityName {
    type Error = FetchError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityName> for String {
    fn from(value: EntityName) -> Self {
        value.0.to_string()
    }
}

impl PartialEq<str> for EntityName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for EntityName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_name_accepts_non_empty() {
        let name = EntityName::new("orders").unwrap();
        assert_eq!(name.as_str(), "orders");
        assert_eq!(name.to_string(), "orders");
        assert_eq!(name, "orders");
    }

    #[test]
    fn test_entity_name_rejects_empty() {
        assert_eq!(
            EntityName::new(""),
            Err(FetchError::InvalidArgument(ENTITY_NAME_REQUIRED))
        );
        assert!(EntityName::try_from(String::new()).is_err());
    }

    #[test]
    fn test_entity_name_keeps_whitespace_names() {
        // Only the empty string is rejected; anything else is a valid key
        let name = EntityName::new(" ").unwrap();
        assert_eq!(name.as_str(), " ");
    }

    #[test]
    fn test_entity_name_deserialize_validates() {
        let name: EntityName = serde_json::from_str("\"customers\"").unwrap();
        assert_eq!(name, "customers");

        let result: Result<EntityName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
