//! Row shapes for the learning platform tables.
//!
//! These mirror remote rows one-to-one. Validation and constraints live in
//! the backend; nothing here enforces them.

pub mod course;
pub mod enrollment;
pub mod learning_path;
pub mod primitives;
pub mod profile;

pub use course::Course;
pub use enrollment::{Enrollment, NewEnrollment};
pub use learning_path::LearningPath;
pub use primitives::{CourseId, PathId, Role, RoleParseError, RowId, UserId};
pub use profile::Profile;
