//! Enrollment writes.

use super::{decode_row, ENROLLMENTS};
use crate::client::{Backend, BackendError};
use crate::domain::{Enrollment, NewEnrollment, PathId, UserId};
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone)]
pub struct EnrollmentService {
    backend: Arc<dyn Backend>,
}

impl EnrollmentService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Enroll a student in a learning path with zero progress.
    ///
    /// Returns the stored row, or `None` if the insert was rejected.
    pub async fn enroll_student(&self, student_id: &UserId, path_id: &PathId) -> Option<Enrollment> {
        let new = NewEnrollment::new(student_id.clone(), path_id.clone());

        let result = match serde_json::to_value(&new) {
            Ok(row) => self.backend.insert_single(ENROLLMENTS, row).await,
            Err(e) => Err(BackendError::Parse(e.to_string())),
        };

        match result.and_then(decode_row) {
            Ok(enrollment) => Some(enrollment),
            Err(e) => {
                error!("Error enrolling student: {}", e);
                None
            }
        }
    }
}
