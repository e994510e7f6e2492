//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the enrollment and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], keeping domain
//! types free of utoipa derives.
//!
//! The document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::enrollments::{EnrollmentCreatedBody, EnrollmentRequestBody};
use crate::inbound::http::schemas::{EnrollmentViewSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Enrollment backend API",
        description = "Admits users into courses and lists a user's enrollments.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::enrollments::do_enrollment,
        crate::inbound::http::enrollments::get_user_enrollments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnrollmentRequestBody,
        EnrollmentCreatedBody,
        EnrollmentViewSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "enrollments", description = "Course enrollment admission and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
