//! core::lookup
//!
//! The key used to identify a single record by id or by name.
//!
//! Every engine operation takes a [`Lookup`] instead of a pair of optional
//! parameters, so there is no ambiguity about precedence when both are
//! supplied. Callers holding the two optional values can use
//! [`Lookup::from_parts`].
//!
//! # Example
//!
//! ```
//! use recipebook::core::lookup::Lookup;
//! use recipebook::core::types::RecordId;
//!
//! assert_eq!(Lookup::from_parts(Some(RecordId::new(3)), None), Some(Lookup::ById(RecordId::new(3))));
//! assert_eq!(Lookup::from_parts(None, Some("Salmon")), Some(Lookup::by_name("Salmon")));
//! assert_eq!(Lookup::from_parts(None, None), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::RecordId;

/// Identifies one record by primary key or by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lookup {
    ById(RecordId),
    ByName(String),
}

impl Lookup {
    /// Look up by primary key.
    pub fn by_id(id: RecordId) -> Self {
        Lookup::ById(id)
    }

    /// Look up by exact, case-sensitive name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Lookup::ByName(name.into())
    }

    /// Build a lookup from an optional id and an optional name.
    ///
    /// Returns `None` when both are absent. The name wins when both are
    /// given.
    pub fn from_parts(id: Option<RecordId>, name: Option<&str>) -> Option<Self> {
        match (id, name) {
            (_, Some(name)) => Some(Lookup::ByName(name.to_string())),
            (Some(id), None) => Some(Lookup::ById(id)),
            (None, None) => None,
        }
    }

    /// Whether a record with this id and name is the one being looked up.
    pub fn matches(&self, id: RecordId, name: &str) -> bool {
        match self {
            Lookup::ById(wanted) => *wanted == id,
            Lookup::ByName(wanted) => wanted == name,
        }
    }
}

impl From<RecordId> for Lookup {
    fn from(id: RecordId) -> Self {
        Lookup::ById(id)
    }
}

impl From<&str> for Lookup {
    fn from(name: &str) -> Self {
        Lookup::ByName(name.to_string())
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::ById(id) => write!(f, "id {}", id),
            Lookup::ByName(name) => write!(f, "name '{}'", name),
        }
    }
}
