//! Driving port for enrollment admission.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CourseId, EnrollmentId, EnrollmentView, Error, UserId};

/// Request to enroll a user in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub user_id: UserId,
    pub course_id: CourseId,
}

/// Outcome of a successful admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollResponse {
    pub enrollment_id: EnrollmentId,
    pub enrollment: EnrollmentView,
}

/// Driving port for enrollment writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Admit the user into the course.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when either side is
    /// unknown and [`crate::domain::ErrorCode::Conflict`] when the pair is
    /// already enrolled.
    async fn enroll(&self, request: EnrollRequest) -> Result<EnrollResponse, Error>;
}
