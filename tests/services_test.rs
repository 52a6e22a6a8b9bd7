use lms_data::domain::NewEnrollment;
use lms_data::service::{COURSES, ENROLLMENTS, LEARNING_PATHS, PROFILES};
use lms_data::domain::RowId;
use lms_data::{
    CourseId, CourseService, EnrollmentService, MockBackend, PathId, PathService, Role, Services,
    UserId, UserService,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::sync::Arc;

fn profile(id: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", id),
        "full_name": format!("User {}", id),
        "role": role,
        "avatar_url": null,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn course(id: &str, created_at: &str) -> Value {
    json!({"id": id, "title": format!("Course {}", id), "created_at": created_at})
}

fn path(id: &str, is_active: bool, created_at: &str) -> Value {
    json!({"id": id, "name": format!("Path {}", id), "is_active": is_active, "created_at": created_at})
}

fn seeded_backend() -> MockBackend {
    MockBackend::new()
        .with_rows(
            PROFILES,
            vec![
                profile("a1", "admin"),
                profile("t1", "teacher"),
                profile("s1", "student"),
                profile("s2", "student"),
            ],
        )
        .with_rows(
            COURSES,
            vec![
                course("c-old", "2023-05-01T08:00:00Z"),
                course("c-new", "2024-06-01T08:00:00Z"),
                course("c-mid", "2024-01-15T08:00:00Z"),
            ],
        )
        .with_rows(
            LEARNING_PATHS,
            vec![
                path("p-old", true, "2023-01-01T00:00:00Z"),
                path("p-retired", false, "2024-12-01T00:00:00Z"),
                path("p-new", true, "2024-02-01T00:00:00Z"),
            ],
        )
}

#[tokio::test]
async fn test_get_users_without_role_returns_all_rows() {
    let users = UserService::new(Arc::new(seeded_backend()));
    let all = users.get_users(None).await;
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_get_users_with_role_returns_only_that_role() {
    let users = UserService::new(Arc::new(seeded_backend()));

    let students = users.get_users(Some(Role::Student)).await;
    let ids: Vec<&str> = students.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert!(students.iter().all(|p| p.role == Role::Student));

    let admins = users.get_users(Some(Role::Admin)).await;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].display_name(), "User a1");
}

#[tokio::test]
async fn test_get_profile_by_id() {
    let users = UserService::new(Arc::new(seeded_backend()));
    let profile = users.get_profile(&UserId::new("t1")).await.unwrap();
    assert_eq!(profile.role, Role::Teacher);
    assert_eq!(profile.email, "t1@example.com");
}

#[tokio::test]
async fn test_get_courses_newest_first() {
    let courses = CourseService::new(Arc::new(seeded_backend()));
    let ids: Vec<String> = courses
        .get_courses()
        .await
        .into_iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(ids, vec!["c-new", "c-mid", "c-old"]);
}

#[tokio::test]
async fn test_get_course_by_id_keeps_columns() {
    let courses = CourseService::new(Arc::new(seeded_backend()));
    let course = courses.get_course(&CourseId::new("c-mid")).await.unwrap();
    assert_eq!(course.column("title"), Some(&json!("Course c-mid")));

    assert!(courses.get_course(&CourseId::new("missing")).await.is_none());
}

#[tokio::test]
async fn test_get_paths_only_active_newest_first() {
    let paths = PathService::new(Arc::new(seeded_backend()));
    let result = paths.get_paths().await;

    assert!(result.iter().all(|p| p.is_active));
    let ids: Vec<String> = result.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["p-new", "p-old"]);
}

#[tokio::test]
async fn test_enroll_student_starts_at_zero_progress() {
    let backend = Arc::new(MockBackend::new());
    let enrollments = EnrollmentService::new(backend.clone());

    let enrollment = enrollments
        .enroll_student(&UserId::new("s1"), &PathId::new("p-new"))
        .await
        .unwrap();

    assert_eq!(enrollment.student_id, UserId::new("s1"));
    assert_eq!(enrollment.path_id, PathId::new("p-new"));
    assert_eq!(enrollment.progress_percentage, Decimal::ZERO);
    assert!(enrollment.id.is_some());

    let stored = backend.rows(ENROLLMENTS);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["progress_percentage"], json!(0));
}

#[tokio::test]
async fn test_enroll_student_twice_still_sends_zero() {
    let backend = Arc::new(MockBackend::new());
    let enrollments = EnrollmentService::new(backend.clone());
    let student = UserId::new("s2");

    for path in ["p-1", "p-2"] {
        let enrollment = enrollments
            .enroll_student(&student, &PathId::new(path))
            .await
            .unwrap();
        assert_eq!(enrollment.progress_percentage, Decimal::ZERO);
    }
    assert_eq!(
        NewEnrollment::new(student, PathId::new("p-3")).progress_percentage(),
        Decimal::ZERO
    );
    assert_eq!(backend.rows(ENROLLMENTS).len(), 2);
}

#[tokio::test]
async fn test_remote_errors_return_defaults() {
    let backend = seeded_backend()
        .failing_on(PROFILES)
        .failing_on(COURSES)
        .failing_on(LEARNING_PATHS)
        .failing_on(ENROLLMENTS);
    let backend = Arc::new(backend);
    let services = Services::new(backend.clone());

    assert!(services.users.get_profile(&UserId::new("a1")).await.is_none());
    assert!(services.users.get_users(None).await.is_empty());
    assert!(services.users.get_users(Some(Role::Teacher)).await.is_empty());
    assert!(services.courses.get_courses().await.is_empty());
    assert!(services.courses.get_course(&CourseId::new("c-new")).await.is_none());
    assert!(services.paths.get_paths().await.is_empty());
    assert!(services
        .enrollments
        .enroll_student(&UserId::new("s1"), &PathId::new("p-new"))
        .await
        .is_none());

    // One request per call, no retries.
    assert_eq!(backend.request_count(), 7);
    assert!(backend.rows(ENROLLMENTS).is_empty());
}

#[tokio::test]
async fn test_courses_with_integer_ids() {
    let backend = MockBackend::new().with_rows(
        COURSES,
        vec![
            json!({"id": 1, "title": "Intro", "created_at": "2024-01-01T00:00:00Z"}),
            json!({"id": 2, "title": "Async", "created_at": "2024-02-01T00:00:00Z"}),
        ],
    );
    let courses = CourseService::new(Arc::new(backend));

    let all = courses.get_courses().await;
    let ids: Vec<&RowId> = all.iter().map(|c| &c.id).collect();
    assert_eq!(ids, vec![&RowId::Int(2), &RowId::Int(1)]);

    let course = courses.get_course(&CourseId::new("2")).await.unwrap();
    assert_eq!(course.column("title"), Some(&json!("Async")));
}

#[tokio::test]
async fn test_paths_with_timezone_less_timestamps() {
    let backend = MockBackend::new().with_rows(
        LEARNING_PATHS,
        vec![
            path("p-a", true, "2024-01-01T00:00:00.123456"),
            path("p-b", true, "2024-03-01T00:00:00.123456"),
        ],
    );
    let paths = PathService::new(Arc::new(backend));

    let ids: Vec<String> = paths
        .get_paths()
        .await
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, vec!["p-b", "p-a"]);
}

#[tokio::test]
async fn test_null_created_at_keeps_the_rest_of_the_list() {
    let backend = MockBackend::new().with_rows(
        COURSES,
        vec![
            course("c-dated", "2024-01-01T00:00:00Z"),
            json!({"id": "c-undated", "title": "Draft", "created_at": null}),
        ],
    );
    let courses = CourseService::new(Arc::new(backend));

    let all = courses.get_courses().await;
    assert_eq!(all.len(), 2);
    // NULL sorts first when descending.
    assert_eq!(all[0].id, RowId::from("c-undated"));
    assert_eq!(all[0].created_at, None);
}
