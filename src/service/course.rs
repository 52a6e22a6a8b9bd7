//! Course lookups.

use super::{decode_row, decode_rows, COURSES};
use crate::client::{Backend, Query};
use crate::domain::{Course, CourseId};
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone)]
pub struct CourseService {
    backend: Arc<dyn Backend>,
}

impl CourseService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Every course, newest first.
    pub async fn get_courses(&self) -> Vec<Course> {
        let query = Query::new(COURSES).order("created_at", false);

        match self.backend.fetch(&query).await.and_then(decode_rows) {
            Ok(courses) => courses,
            Err(e) => {
                error!("Error fetching courses: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_course(&self, course_id: &CourseId) -> Option<Course> {
        let query = Query::new(COURSES).eq("id", course_id.as_str()).single();

        match self.backend.fetch_single(&query).await.and_then(decode_row) {
            Ok(course) => Some(course),
            Err(e) => {
                error!("Error fetching course: {}", e);
                None
            }
        }
    }
}
