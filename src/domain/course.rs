//! Course row from the `courses` table.

use crate::domain::RowId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A course. Only the key and creation time are pulled out; every other
/// column is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: RowId,
    /// Raw timestamp text; ordering happens remotely.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

impl Course {
    /// Look up an untyped column by name.
    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }
}
