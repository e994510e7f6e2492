//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter, where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced user or course does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The user is already enrolled in the course.
    #[schema(rename = "conflict")]
    Conflict,
    /// Storage is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 1 is already enrolled in course 10")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending identifiers.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::EnrollmentView`].
///
/// Flat projection of one enrollment.
#[derive(ToSchema)]
#[schema(as = crate::domain::EnrollmentView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnrollmentViewSchema {
    /// Storage-assigned enrollment identifier.
    #[schema(example = 1)]
    enrollment_id: i32,
    /// Enrolled user.
    #[schema(example = 1)]
    user_id: i32,
    /// Course the user is enrolled in.
    #[schema(example = 10)]
    course_id: i32,
    /// Course description.
    #[schema(example = "Distributed Systems")]
    course_name: String,
    /// Enrollment status.
    #[schema(example = "ACTIVE")]
    status: String,
}
