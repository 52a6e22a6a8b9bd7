//! Table services.
//!
//! Every method is one round trip: build a query, send it, decode the rows.
//! Failures are logged and mapped to `None` or an empty `Vec`; callers never
//! see an error.

pub mod course;
pub mod enrollment;
pub mod path;
pub mod profile;

pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use path::PathService;
pub use profile::UserService;

use crate::client::{Backend, BackendError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

pub const PROFILES: &str = "profiles";
pub const COURSES: &str = "courses";
pub const LEARNING_PATHS: &str = "learning_paths";
pub const ENROLLMENTS: &str = "enrollments";

/// All four services sharing one backend.
#[derive(Debug, Clone)]
pub struct Services {
    pub users: UserService,
    pub courses: CourseService,
    pub paths: PathService,
    pub enrollments: EnrollmentService,
}

impl Services {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            users: UserService::new(backend.clone()),
            courses: CourseService::new(backend.clone()),
            paths: PathService::new(backend.clone()),
            enrollments: EnrollmentService::new(backend),
        }
    }
}

pub(crate) fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, BackendError> {
    serde_json::from_value(row).map_err(|e| BackendError::Parse(e.to_string()))
}

pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, BackendError> {
    rows.into_iter().map(decode_row).collect()
}
