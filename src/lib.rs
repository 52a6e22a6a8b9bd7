pub mod client;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use client::{browser_client, server_client, Backend, BackendError, MockBackend, Query, RestClient};
pub use command::Command;
pub use config::Config;
pub use domain::{Course, CourseId, Enrollment, LearningPath, PathId, Profile, Role, RowId, UserId};
pub use error::AppError;
pub use service::{CourseService, EnrollmentService, PathService, Services, UserService};
