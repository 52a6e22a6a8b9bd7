//! Enrollment rows from the `enrollments` table.

use crate::domain::{PathId, RowId, UserId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A student's enrollment in a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    pub student_id: UserId,
    pub path_id: PathId,
    /// Completion in percent (0..=100).
    #[serde(with = "rust_decimal::serde::float")]
    pub progress_percentage: Decimal,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

/// Insert shape for a new enrollment.
///
/// Progress always starts at zero; there is no way to construct one with a
/// different value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEnrollment {
    student_id: UserId,
    path_id: PathId,
    #[serde(serialize_with = "serialize_progress")]
    progress_percentage: Decimal,
}

impl NewEnrollment {
    pub fn new(student_id: UserId, path_id: PathId) -> Self {
        Self {
            student_id,
            path_id,
            progress_percentage: Decimal::ZERO,
        }
    }

    pub fn student_id(&self) -> &UserId {
        &self.student_id
    }

    pub fn path_id(&self) -> &PathId {
        &self.path_id
    }

    pub fn progress_percentage(&self) -> Decimal {
        self.progress_percentage
    }
}

/// Whole percentages go out as JSON integers so both integer and numeric
/// columns accept them; fractional ones as floats.
fn serialize_progress<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    match value.fract().is_zero().then(|| value.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => rust_decimal::serde::float::serialize(value, serializer),
    }
}
