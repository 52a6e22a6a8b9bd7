//! Operator commands for the `lms-data` binary.

use crate::domain::{CourseId, PathId, Role, UserId};
use crate::error::AppError;
use crate::service::Services;
use serde_json::Value;

pub const USAGE: &str = "lms-data <profiles [role] | profile <id> | courses | course <id> | paths | enroll <student_id> <path_id>>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Profiles(Option<Role>),
    Profile(UserId),
    Courses,
    Course(CourseId),
    Paths,
    Enroll(UserId, PathId),
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let args: Vec<&str> = args.iter().map(|a| a.as_str()).collect();

        match args.as_slice() {
            ["profiles"] => Ok(Command::Profiles(None)),
            ["profiles", role] => role
                .parse::<Role>()
                .map(|r| Command::Profiles(Some(r)))
                .map_err(|e| AppError::Usage(e.to_string())),
            ["profile", id] => Ok(Command::Profile(UserId::new(*id))),
            ["courses"] => Ok(Command::Courses),
            ["course", id] => Ok(Command::Course(CourseId::new(*id))),
            ["paths"] => Ok(Command::Paths),
            ["enroll", student, path] => Ok(Command::Enroll(UserId::new(*student), PathId::new(*path))),
            _ => Err(AppError::Usage(USAGE.to_string())),
        }
    }

    /// Run against the services and render the result as JSON.
    pub async fn run(&self, services: &Services) -> Result<Value, AppError> {
        let value = match self {
            Command::Profiles(role) => serde_json::to_value(services.users.get_users(*role).await)?,
            Command::Profile(id) => serde_json::to_value(services.users.get_profile(id).await)?,
            Command::Courses => serde_json::to_value(services.courses.get_courses().await)?,
            Command::Course(id) => serde_json::to_value(services.courses.get_course(id).await)?,
            Command::Paths => serde_json::to_value(services.paths.get_paths().await)?,
            Command::Enroll(student, path) => {
                serde_json::to_value(services.enrollments.enroll_student(student, path).await)?
            }
        };
        Ok(value)
    }
}
