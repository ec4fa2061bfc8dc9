use axum::http::{header, Method, StatusCode};
use time::{Date, Month};
use tower::ServiceExt;

use crate::api::router::router;
use crate::core::config::Settings;
use crate::core::state::AppState;
use crate::db::types::AssessmentKind;
use crate::repositories;
use crate::test_support;

const FORM_URI: &str = "/teacher/create-assessment";

#[tokio::test]
async fn create_assessment_without_credentials_redirects_to_login() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let settings = Settings::load().expect("settings");
    let app = router(test_support::build_state(settings));

    let request = test_support::form_request(
        FORM_URI,
        None,
        &[("title", "Fractions quiz"), ("assessment_type", "quiz"), ("questions", "[]")],
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("flash cookie");
    assert!(cookie.starts_with("flash=error:"), "unexpected cookie: {cookie}");
}

#[tokio::test]
async fn create_assessment_with_garbage_token_redirects_to_login() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let settings = Settings::load().expect("settings");
    let app = router(test_support::build_state(settings));

    let request = test_support::form_request(
        FORM_URI,
        Some("not-a-jwt"),
        &[("title", "Fractions quiz"), ("assessment_type", "quiz"), ("questions", "[]")],
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn authoring_persists_resolvable_questions_against_the_new_parent() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let Some(pool) = test_support::connect_test_db().await else { return };
    let settings = Settings::load().expect("settings");

    let teacher = test_support::insert_teacher(&pool, "ada@example.com", "Ada Teacher").await;
    let classroom = test_support::insert_classroom(&pool, &teacher.id, "Year 7 Science").await;
    let token = test_support::bearer_token(&teacher.id, &settings);
    let app = router(AppState::new(settings, pool.clone()));

    let questions = r#"[
        {"text": "Capital of France?", "options": {"0": "London", "1": "Paris"}, "correct": "1"},
        {"text": "Broken", "options": {"0": "London", "1": "Paris"}, "correct": "9"},
        {"text": "Two plus two?", "options": {"0": "3", "1": "4"}, "correct": "1"}
    ]"#;

    let request = test_support::form_request(
        FORM_URI,
        Some(&token),
        &[
            ("title", "Unit review"),
            ("description", "End of unit"),
            ("classroom_id", &classroom.id),
            ("assessment_type", "q_assignment"),
            ("due_date", "2026-09-01"),
            ("questions", questions),
        ],
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/teacher/dashboard");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("flash cookie");
    assert!(cookie.starts_with("flash=success:"), "unexpected cookie: {cookie}");

    let (parent_id, due_date): (String, Option<Date>) =
        sqlx::query_as("SELECT id, due_date FROM q_assignments WHERE classroom_id = $1")
            .bind(&classroom.id)
            .fetch_one(&pool)
            .await
            .expect("parent row");
    assert_eq!(due_date, Some(Date::from_calendar_date(2026, Month::September, 1).unwrap()));

    let rows = repositories::questions::list_by_assessment(
        &pool,
        AssessmentKind::QAssignment,
        &parent_id,
    )
    .await
    .expect("questions");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.assessment_id == parent_id));

    assert_eq!(rows[0].position, 0);
    assert_eq!(rows[0].question_text, "Capital of France?");
    assert_eq!(rows[0].correct_answer, "Paris");
    assert_eq!(rows[0].options.0.get("1").map(String::as_str), Some("Paris"));

    // position 1 belonged to the skipped question and stays vacant
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].question_text, "Two plus two?");
    assert_eq!(rows[1].correct_answer, "4");
}

#[tokio::test]
async fn unknown_assessment_type_writes_no_rows() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let Some(pool) = test_support::connect_test_db().await else { return };
    let settings = Settings::load().expect("settings");

    let teacher = test_support::insert_teacher(&pool, "ada@example.com", "Ada Teacher").await;
    let classroom = test_support::insert_classroom(&pool, &teacher.id, "Year 7 Science").await;
    let token = test_support::bearer_token(&teacher.id, &settings);
    let app = router(AppState::new(settings, pool.clone()));

    let request = test_support::form_request(
        FORM_URI,
        Some(&token),
        &[
            ("title", "Not an assessment"),
            ("classroom_id", &classroom.id),
            ("assessment_type", "survey"),
            ("questions", r#"[{"text": "Q?", "options": {"0": "A"}, "correct": "0"}]"#),
        ],
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), FORM_URI);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("flash cookie");
    assert!(cookie.starts_with("flash=error:"), "unexpected cookie: {cookie}");

    let written: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM quizzes)
              + (SELECT COUNT(*) FROM tests)
              + (SELECT COUNT(*) FROM q_assignments)
              + (SELECT COUNT(*) FROM questions)",
    )
    .fetch_one(&pool)
    .await
    .expect("row counts");
    assert_eq!(written, 0);
}

#[tokio::test]
async fn list_assessments_requires_authentication() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let settings = Settings::load().expect("settings");
    let app = router(test_support::build_state(settings));

    let request = test_support::json_request(
        Method::GET,
        "/api/v1/classrooms/room-1/assessments?kind=quiz",
        None,
        None,
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_questions_requires_authentication() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();

    let settings = Settings::load().expect("settings");
    let app = router(test_support::build_state(settings));

    let request = test_support::json_request(
        Method::GET,
        "/api/v1/assessments/quiz/assessment-1/questions",
        None,
        None,
    );
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
