//! Strongly-typed ID wrappers for all record types
//!
//! Ids are opaque strings: default categories use short numeric ids
//! ("1".."13") while new records get a random UUID. Wrapping them keeps a
//! category id from being passed where a budget id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form for display (first 8 characters)
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(8) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }

            /// Check whether this id starts with the given prefix
            pub fn matches_prefix(&self, prefix: &str) -> bool {
                !prefix.is_empty() && self.0.starts_with(prefix)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(TransactionId);
define_id!(CategoryId);
define_id!(BudgetId);
