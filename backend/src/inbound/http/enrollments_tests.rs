//! Tests for enrollment HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    EnrollResponse, ListUserEnrollmentsResponse, MockEnrollmentCommand, MockEnrollmentQuery,
};
use crate::domain::{EnrollmentId, EnrollmentService, Error};
use crate::inbound::http::error::{json_config, path_config};
use crate::outbound::memory::InMemoryEnrollmentStore;

fn app_with_state(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .service(scope())
}

fn seeded_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store = Arc::new(
        InMemoryEnrollmentStore::new()
            .with_user(UserId::new(1))
            .with_course(CourseId::new(10), "Distributed Systems"),
    );
    let service = Arc::new(EnrollmentService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        store,
    ));
    app_with_state(HttpState::new(service.clone(), service))
}

fn enroll_request(user_id: i32, course_id: i32) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/enrollments/doEnrollment")
        .set_json(json!({ "userId": user_id, "courseId": course_id }))
        .to_request()
}

#[actix_web::test]
async fn do_enrollment_returns_created_with_identifier() {
    let app = actix_test::init_service(seeded_app()).await;

    let response = actix_test::call_service(&app, enroll_request(1, 10)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "enrollmentId": 1, "message": "Enrollment 1 created" })
    );
}

#[actix_web::test]
async fn do_enrollment_twice_conflicts() {
    let app = actix_test::init_service(seeded_app()).await;
    let first = actix_test::call_service(&app, enroll_request(1, 10)).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = actix_test::call_service(&app, enroll_request(1, 10)).await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["details"], json!({ "userId": 1, "courseId": 10 }));
}

#[actix_web::test]
async fn do_enrollment_for_unknown_user_is_not_found() {
    let app = actix_test::init_service(seeded_app()).await;

    let response = actix_test::call_service(&app, enroll_request(999, 10)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"], json!({ "userId": 999 }));
}

#[actix_web::test]
async fn do_enrollment_for_unknown_course_is_not_found() {
    let app = actix_test::init_service(seeded_app()).await;

    let response = actix_test::call_service(&app, enroll_request(1, 999)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"], json!({ "courseId": 999 }));
}

#[actix_web::test]
async fn do_enrollment_rejects_missing_fields() {
    let app = actix_test::init_service(seeded_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/enrollments/doEnrollment")
        .set_json(json!({ "userId": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn do_enrollment_maps_unavailable_storage_to_503() {
    let mut command = MockEnrollmentCommand::new();
    command
        .expect_enroll()
        .return_once(|_| Err(Error::service_unavailable("storage unavailable: refused")));
    let query = MockEnrollmentQuery::new();
    let app = actix_test::init_service(app_with_state(HttpState::new(
        Arc::new(command),
        Arc::new(query),
    )))
    .await;

    let response = actix_test::call_service(&app, enroll_request(1, 10)).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn do_enrollment_passes_identifiers_to_the_port() {
    let mut command = MockEnrollmentCommand::new();
    command
        .expect_enroll()
        .withf(|request| {
            request.user_id == UserId::new(7) && request.course_id == CourseId::new(70)
        })
        .return_once(|request| {
            Ok(EnrollResponse {
                enrollment_id: EnrollmentId::new(5),
                enrollment: EnrollmentView {
                    enrollment_id: EnrollmentId::new(5),
                    user_id: request.user_id,
                    course_id: request.course_id,
                    course_name: "Compilers".to_owned(),
                    status: "ACTIVE".to_owned(),
                },
            })
        });
    let app = actix_test::init_service(app_with_state(HttpState::new(
        Arc::new(command),
        Arc::new(MockEnrollmentQuery::new()),
    )))
    .await;

    let response = actix_test::call_service(&app, enroll_request(7, 70)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["enrollmentId"], 5);
}

#[actix_web::test]
async fn get_user_enrollments_lists_views_after_enrolling() {
    let app = actix_test::init_service(seeded_app()).await;
    actix_test::call_service(&app, enroll_request(1, 10)).await;

    let request = actix_test::TestRequest::get()
        .uri("/enrollments/user/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([{
            "enrollmentId": 1,
            "userId": 1,
            "courseId": 10,
            "courseName": "Distributed Systems",
            "status": "ACTIVE"
        }])
    );
}

#[actix_web::test]
async fn get_user_enrollments_for_unknown_user_is_empty() {
    let app = actix_test::init_service(seeded_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/enrollments/user/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn get_user_enrollments_rejects_non_integer_identifier() {
    let mut query = MockEnrollmentQuery::new();
    query.expect_list_for_user().times(0);
    let app = actix_test::init_service(app_with_state(HttpState::new(
        Arc::new(MockEnrollmentCommand::new()),
        Arc::new(query),
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/enrollments/user/abc")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn get_user_enrollments_forwards_the_path_identifier() {
    let mut query = MockEnrollmentQuery::new();
    query
        .expect_list_for_user()
        .withf(|request| request.user_id == UserId::new(42))
        .return_once(|_| Ok(ListUserEnrollmentsResponse { enrollments: Vec::new() }));
    let app = actix_test::init_service(app_with_state(HttpState::new(
        Arc::new(MockEnrollmentCommand::new()),
        Arc::new(query),
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/enrollments/user/42")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}
