//! Enrollment HTTP handlers.
//!
//! ```text
//! POST /enrollments/doEnrollment
//! GET  /enrollments/user/{userId}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{EnrollRequest, ListUserEnrollmentsRequest};
use crate::domain::{CourseId, EnrollmentView, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EnrollmentViewSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request payload for enrolling a user in a course.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequestBody {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = 10)]
    pub course_id: i32,
}

impl From<EnrollmentRequestBody> for EnrollRequest {
    fn from(value: EnrollmentRequestBody) -> Self {
        Self {
            user_id: UserId::new(value.user_id),
            course_id: CourseId::new(value.course_id),
        }
    }
}

/// Response payload confirming a new enrollment.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreatedBody {
    #[schema(example = 1)]
    pub enrollment_id: i32,
    #[schema(example = "Enrollment 1 created")]
    pub message: String,
}

/// Enroll a user in a course.
///
/// Responds `201 Created` with the new enrollment identifier. Unknown users
/// or courses yield `404`; an existing enrollment for the pair yields `409`.
#[utoipa::path(
    post,
    path = "/enrollments/doEnrollment",
    request_body = EnrollmentRequestBody,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentCreatedBody),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 404, description = "Unknown user or course", body = ErrorSchema),
        (status = 409, description = "User already enrolled in the course", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "doEnrollment"
)]
#[post("/doEnrollment")]
pub async fn do_enrollment(
    state: web::Data<HttpState>,
    payload: web::Json<EnrollmentRequestBody>,
) -> ApiResult<HttpResponse> {
    let response = state
        .enrollments
        .enroll(EnrollRequest::from(payload.into_inner()))
        .await?;

    let enrollment_id = response.enrollment_id.get();
    Ok(HttpResponse::Created().json(EnrollmentCreatedBody {
        enrollment_id,
        message: format!("Enrollment {enrollment_id} created"),
    }))
}

/// List every enrollment held by a user.
///
/// Users without enrollments, including unknown users, get an empty array.
#[utoipa::path(
    get,
    path = "/enrollments/user/{userId}",
    params(
        ("userId" = i32, Path, description = "User whose enrollments to list")
    ),
    responses(
        (status = 200, description = "Enrollments of the user", body = [EnrollmentViewSchema]),
        (status = 400, description = "Non-integer user identifier", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "getUserEnrollments"
)]
#[get("/user/{user_id}")]
pub async fn get_user_enrollments(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<EnrollmentView>>> {
    let user_id = UserId::new(path.into_inner());
    let response = state
        .enrollments_query
        .list_for_user(ListUserEnrollmentsRequest { user_id })
        .await?;

    Ok(web::Json(response.enrollments))
}

/// Mount the enrollment handlers under `/enrollments`.
pub fn scope() -> actix_web::Scope {
    web::scope("/enrollments")
        .service(do_enrollment)
        .service(get_user_enrollments)
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
