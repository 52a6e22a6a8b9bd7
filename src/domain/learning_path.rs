//! Learning path row from the `learning_paths` table.

use crate::domain::RowId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A learning path. Untyped columns are carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: RowId,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

impl LearningPath {
    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_with_naive_timestamp() {
        let row = serde_json::json!({
            "id": 3,
            "name": "Systems",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00.123456"
        });

        let path: LearningPath = serde_json::from_value(row).unwrap();
        assert_eq!(path.id, RowId::Int(3));
        assert!(path.is_active);
        assert_eq!(path.column("name"), Some(&Value::from("Systems")));
    }
}
