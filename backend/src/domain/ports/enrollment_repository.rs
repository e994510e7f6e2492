//! Port for enrollment persistence.
//!
//! Adapters must reject a second enrollment for the same user and course
//! with [`EnrollmentRepositoryError::Duplicate`], even when two inserts race
//! past the existence check.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, NewEnrollment, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "enrollment repository query failed: {message}",
        /// An enrollment already exists for the pair.
        Duplicate { user_id: UserId, course_id: CourseId } =>
            "user {user_id} is already enrolled in course {course_id}",
    }
}

/// Port for writing and reading enrollments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Report whether an enrollment exists for the user and course.
    async fn exists_for(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<bool, EnrollmentRepositoryError>;

    /// Persist a new enrollment and return it with its assigned identifier.
    async fn insert(&self, enrollment: &NewEnrollment)
    -> Result<Enrollment, EnrollmentRepositoryError>;

    /// List every enrollment held by the user, in storage order.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError>;
}
