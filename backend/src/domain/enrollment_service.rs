//! Enrollment admission service.
//!
//! Resolves the user and course, rejects duplicates, persists the new
//! enrollment, and projects a user's enrollments into [`EnrollmentView`]s.
//! The service keeps no state of its own: every call re-resolves users and
//! courses through the ports.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollRequest, EnrollResponse, EnrollmentCommand,
    EnrollmentQuery, EnrollmentRepository, EnrollmentRepositoryError, ListUserEnrollmentsRequest,
    ListUserEnrollmentsResponse, UserRepository, UserRepositoryError,
};
use crate::domain::{CourseId, Enrollment, EnrollmentView, Error, NewEnrollment, UserId};

/// Opaque storage failure passed through from a repository adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageFailure {
    /// Storage could not be reached.
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
    /// Storage was reached but the operation failed.
    #[error("storage operation failed: {message}")]
    Query { message: String },
}

impl From<UserRepositoryError> for StorageFailure {
    fn from(value: UserRepositoryError) -> Self {
        match value {
            UserRepositoryError::Connection { message } => Self::Unavailable { message },
            UserRepositoryError::Query { message } => Self::Query { message },
        }
    }
}

impl From<CourseRepositoryError> for StorageFailure {
    fn from(value: CourseRepositoryError) -> Self {
        match value {
            CourseRepositoryError::Connection { message } => Self::Unavailable { message },
            CourseRepositoryError::Query { message } => Self::Query { message },
        }
    }
}

/// Coarse failure category, distinguishing missing references from conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionErrorKind {
    NotFound,
    AlreadyEnrolled,
    StorageFailure,
}

/// Typed failures raised by the admission service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// The user identifier does not resolve.
    #[error("user {user_id} not found")]
    UserNotFound { user_id: UserId },
    /// The course identifier does not resolve.
    #[error("course {course_id} not found")]
    CourseNotFound { course_id: CourseId },
    /// The user already holds an enrollment in the course.
    #[error("user {user_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { user_id: UserId, course_id: CourseId },
    /// The persistence collaborator failed.
    #[error(transparent)]
    Storage(#[from] StorageFailure),
}

impl AdmissionError {
    /// Failure category for callers that only need to branch on the kind.
    #[must_use]
    pub const fn kind(&self) -> AdmissionErrorKind {
        match self {
            Self::UserNotFound { .. } | Self::CourseNotFound { .. } => AdmissionErrorKind::NotFound,
            Self::AlreadyEnrolled { .. } => AdmissionErrorKind::AlreadyEnrolled,
            Self::Storage(_) => AdmissionErrorKind::StorageFailure,
        }
    }
}

impl From<UserRepositoryError> for AdmissionError {
    fn from(value: UserRepositoryError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<CourseRepositoryError> for AdmissionError {
    fn from(value: CourseRepositoryError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<EnrollmentRepositoryError> for AdmissionError {
    fn from(value: EnrollmentRepositoryError) -> Self {
        match value {
            EnrollmentRepositoryError::Duplicate { user_id, course_id } => {
                Self::AlreadyEnrolled { user_id, course_id }
            }
            EnrollmentRepositoryError::Connection { message } => {
                Self::Storage(StorageFailure::Unavailable { message })
            }
            EnrollmentRepositoryError::Query { message } => {
                Self::Storage(StorageFailure::Query { message })
            }
        }
    }
}

impl From<AdmissionError> for Error {
    fn from(value: AdmissionError) -> Self {
        let message = value.to_string();
        match value {
            AdmissionError::UserNotFound { user_id } => {
                Self::not_found(message).with_details(json!({ "userId": user_id }))
            }
            AdmissionError::CourseNotFound { course_id } => {
                Self::not_found(message).with_details(json!({ "courseId": course_id }))
            }
            AdmissionError::AlreadyEnrolled { user_id, course_id } => Self::conflict(message)
                .with_details(json!({ "userId": user_id, "courseId": course_id })),
            AdmissionError::Storage(StorageFailure::Unavailable { .. }) => {
                Self::service_unavailable(message)
            }
            AdmissionError::Storage(StorageFailure::Query { .. }) => Self::internal(message),
        }
    }
}

/// Admission service implementing the enrollment driving ports.
pub struct EnrollmentService<U: ?Sized, C: ?Sized, E: ?Sized> {
    users: Arc<U>,
    courses: Arc<C>,
    enrollments: Arc<E>,
}

impl<U: ?Sized, C: ?Sized, E: ?Sized> Clone for EnrollmentService<U, C, E> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            courses: Arc::clone(&self.courses),
            enrollments: Arc::clone(&self.enrollments),
        }
    }
}

impl<U: ?Sized, C: ?Sized, E: ?Sized> EnrollmentService<U, C, E> {
    /// Create a service over the user, course, and enrollment repositories.
    pub fn new(users: Arc<U>, courses: Arc<C>, enrollments: Arc<E>) -> Self {
        Self {
            users,
            courses,
            enrollments,
        }
    }
}

impl<U, C, E> EnrollmentService<U, C, E>
where
    U: UserRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    /// Admit `user_id` into `course_id`.
    ///
    /// # Errors
    /// - [`AdmissionError::UserNotFound`] / [`AdmissionError::CourseNotFound`]
    ///   when a reference does not resolve; nothing is written.
    /// - [`AdmissionError::AlreadyEnrolled`] when the pair already exists,
    ///   whether caught by the existence check or by storage uniqueness.
    /// - [`AdmissionError::Storage`] for any other adapter failure.
    pub async fn admit(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Enrollment, AdmissionError> {
        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or(AdmissionError::UserNotFound { user_id })
            .inspect_err(|_| debug!(%user_id, "admission rejected: unknown user"))?;

        let course = self
            .courses
            .find_by_id(&course_id)
            .await?
            .ok_or(AdmissionError::CourseNotFound { course_id })
            .inspect_err(|_| debug!(%course_id, "admission rejected: unknown course"))?;

        if self.enrollments.exists_for(&user_id, &course_id).await? {
            debug!(%user_id, %course_id, "admission rejected: already enrolled");
            return Err(AdmissionError::AlreadyEnrolled { user_id, course_id });
        }

        // A concurrent admission can still win the insert; storage reports it
        // as a duplicate, which maps to `AlreadyEnrolled`.
        let enrollment = self
            .enrollments
            .insert(&NewEnrollment::initial(&user, &course))
            .await
            .map_err(AdmissionError::from)
            .inspect_err(|err| {
                if matches!(err, AdmissionError::AlreadyEnrolled { .. }) {
                    warn!(%user_id, %course_id, "concurrent admission lost the insert race");
                }
            })?;

        info!(
            enrollment_id = %enrollment.id(),
            %user_id,
            %course_id,
            "enrollment created"
        );
        Ok(enrollment)
    }

    /// Project every enrollment held by `user_id`.
    ///
    /// Unknown users yield an empty list.
    ///
    /// # Errors
    /// Returns [`AdmissionError::Storage`] when the repository fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<EnrollmentView>, AdmissionError> {
        let enrollments = self.enrollments.list_for_user(&user_id).await?;
        Ok(enrollments.iter().map(EnrollmentView::from).collect())
    }
}

#[async_trait]
impl<U, C, E> EnrollmentCommand for EnrollmentService<U, C, E>
where
    U: UserRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    async fn enroll(&self, request: EnrollRequest) -> Result<EnrollResponse, Error> {
        let enrollment = self.admit(request.user_id, request.course_id).await?;
        Ok(EnrollResponse {
            enrollment_id: enrollment.id(),
            enrollment: EnrollmentView::from(enrollment),
        })
    }
}

#[async_trait]
impl<U, C, E> EnrollmentQuery for EnrollmentService<U, C, E>
where
    U: UserRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    async fn list_for_user(
        &self,
        request: ListUserEnrollmentsRequest,
    ) -> Result<ListUserEnrollmentsResponse, Error> {
        let enrollments = self.list_by_user(request.user_id).await?;
        Ok(ListUserEnrollmentsResponse { enrollments })
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
