//! PostgreSQL-backed `EnrollmentRepository` implementation using Diesel ORM.
//!
//! The `(user_id, course_id)` unique constraint backs the duplicate check:
//! when two admissions race past `exists_for`, the losing insert hits
//! `UniqueViolation` and is reported as
//! [`EnrollmentRepositoryError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, NewEnrollment,
    UnknownEnrollmentStatus, User, UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CourseRow, EnrollmentRow, NewEnrollmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{courses, enrollments};

/// Diesel-backed implementation of the enrollment repository port.
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    map_basic_pool_error(error, EnrollmentRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> EnrollmentRepositoryError {
    map_basic_diesel_error(
        error,
        EnrollmentRepositoryError::query,
        EnrollmentRepositoryError::connection,
    )
}

/// Insert-specific mapping: a unique violation means the pair already exists.
fn map_insert_error(error: DieselError, draft: &NewEnrollment) -> EnrollmentRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                constraint = info.constraint_name(),
                user_id = %draft.user_id,
                course_id = %draft.course_id,
                "enrollment insert hit unique constraint"
            );
            EnrollmentRepositoryError::duplicate(draft.user_id, draft.course_id)
        }
        other => map_diesel_error(other),
    }
}

fn row_to_enrollment(
    row: EnrollmentRow,
    course: CourseRow,
) -> Result<Enrollment, EnrollmentRepositoryError> {
    let status: EnrollmentStatus = row
        .status
        .parse()
        .map_err(|err: UnknownEnrollmentStatus| EnrollmentRepositoryError::query(err.to_string()))?;

    Ok(Enrollment::new(
        EnrollmentId::new(row.enrollment_id),
        User::new(UserId::new(row.user_id)),
        Course::new(CourseId::new(course.course_id), course.description),
        status,
    ))
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn exists_for(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<bool, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            enrollments::table.filter(
                enrollments::user_id
                    .eq(user_id.get())
                    .and(enrollments::course_id.eq(course_id.get())),
            ),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewEnrollmentRow {
            user_id: enrollment.user_id.get(),
            course_id: enrollment.course_id.get(),
            status: enrollment.status.as_str(),
        };

        let row = diesel::insert_into(enrollments::table)
            .values(&new_row)
            .returning(EnrollmentRow::as_returning())
            .get_result::<EnrollmentRow>(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, enrollment))?;

        let course = courses::table
            .filter(courses::course_id.eq(row.course_id))
            .select(CourseRow::as_select())
            .first::<CourseRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_enrollment(row, course)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(EnrollmentRow, CourseRow)> = enrollments::table
            .inner_join(courses::table)
            .filter(enrollments::user_id.eq(user_id.get()))
            .order(enrollments::enrollment_id.asc())
            .select((EnrollmentRow::as_select(), CourseRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(row, course)| row_to_enrollment(row, course))
            .collect()
    }
}
