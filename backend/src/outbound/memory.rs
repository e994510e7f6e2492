//! In-process enrollment store used when no database is configured.
//!
//! One store implements all three driven ports so enrollments can resolve
//! the course description they project. The existence check and the insert
//! happen under a single lock, so duplicate pairs are rejected with
//! [`EnrollmentRepositoryError::Duplicate`] just as the PostgreSQL unique
//! constraint would.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollmentRepository, EnrollmentRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, NewEnrollment, User, UserId,
};

#[derive(Debug)]
struct StoredEnrollment {
    user_id: UserId,
    course_id: CourseId,
    status: EnrollmentStatus,
}

#[derive(Debug)]
struct StoreState {
    users: BTreeSet<UserId>,
    courses: BTreeMap<CourseId, String>,
    enrollments: BTreeMap<EnrollmentId, StoredEnrollment>,
    next_enrollment_id: i32,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: BTreeSet::new(),
            courses: BTreeMap::new(),
            enrollments: BTreeMap::new(),
            next_enrollment_id: 1,
        }
    }
}

impl StoreState {
    fn holds(&self, user_id: UserId, course_id: CourseId) -> bool {
        self.enrollments
            .values()
            .any(|stored| stored.user_id == user_id && stored.course_id == course_id)
    }

    fn materialise(&self, id: EnrollmentId, stored: &StoredEnrollment) -> Option<Enrollment> {
        let description = self.courses.get(&stored.course_id)?;
        Some(Enrollment::new(
            id,
            User::new(stored.user_id),
            Course::new(stored.course_id, description.as_str()),
            stored.status,
        ))
    }
}

/// Mutex-guarded store backing the user, course, and enrollment ports.
///
/// Enrollment identifiers are assigned sequentially from 1.
///
/// # Examples
/// ```
/// use enrollment_backend::domain::{CourseId, UserId};
/// use enrollment_backend::outbound::memory::InMemoryEnrollmentStore;
///
/// let store = InMemoryEnrollmentStore::new()
///     .with_user(UserId::new(1))
///     .with_course(CourseId::new(10), "Distributed Systems");
/// assert_eq!(store.enrollment_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEnrollmentStore {
    state: Mutex<StoreState>,
}

impl InMemoryEnrollmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, builder style.
    #[must_use]
    pub fn with_user(self, user_id: UserId) -> Self {
        self.add_user(user_id);
        self
    }

    /// Register a course, builder style.
    #[must_use]
    pub fn with_course(self, course_id: CourseId, description: impl Into<String>) -> Self {
        self.add_course(course_id, description);
        self
    }

    /// Register a user on a shared store.
    pub fn add_user(&self, user_id: UserId) {
        self.lock().users.insert(user_id);
    }

    /// Register or rename a course on a shared store.
    pub fn add_course(&self, course_id: CourseId, description: impl Into<String>) {
        self.lock().courses.insert(course_id, description.into());
    }

    /// Number of stored enrollments across all users.
    #[must_use]
    pub fn enrollment_count(&self) -> usize {
        self.lock().enrollments.len()
    }

    // No critical section leaves the maps half-updated; poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryEnrollmentStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock().users.contains(id).then(|| User::new(*id)))
    }
}

#[async_trait]
impl CourseRepository for InMemoryEnrollmentStore {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self
            .lock()
            .courses
            .get(id)
            .map(|description| Course::new(*id, description.as_str())))
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentStore {
    async fn exists_for(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<bool, EnrollmentRepositoryError> {
        Ok(self.lock().holds(*user_id, *course_id))
    }

    async fn insert(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut state = self.lock();
        if state.holds(enrollment.user_id, enrollment.course_id) {
            return Err(EnrollmentRepositoryError::duplicate(
                enrollment.user_id,
                enrollment.course_id,
            ));
        }
        if !state.users.contains(&enrollment.user_id) {
            return Err(EnrollmentRepositoryError::query(format!(
                "user {} does not exist",
                enrollment.user_id
            )));
        }

        let id = EnrollmentId::new(state.next_enrollment_id);
        let stored = StoredEnrollment {
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            status: enrollment.status,
        };
        let Some(created) = state.materialise(id, &stored) else {
            return Err(EnrollmentRepositoryError::query(format!(
                "course {} does not exist",
                enrollment.course_id
            )));
        };

        state.enrollments.insert(id, stored);
        state.next_enrollment_id += 1;
        Ok(created)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        let state = self.lock();
        state
            .enrollments
            .iter()
            .filter(|(_, stored)| stored.user_id == *user_id)
            .map(|(id, stored)| {
                state.materialise(*id, stored).ok_or_else(|| {
                    EnrollmentRepositoryError::query(format!(
                        "course {} vanished from the store",
                        stored.course_id
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const USER: UserId = UserId::new(1);
    const COURSE: CourseId = CourseId::new(10);

    #[fixture]
    fn store() -> InMemoryEnrollmentStore {
        InMemoryEnrollmentStore::new()
            .with_user(USER)
            .with_course(COURSE, "Distributed Systems")
            .with_course(CourseId::new(11), "Compilers")
    }

    fn draft(course_id: CourseId) -> NewEnrollment {
        NewEnrollment {
            user_id: USER,
            course_id,
            status: EnrollmentStatus::Active,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids(store: InMemoryEnrollmentStore) {
        let first = store.insert(&draft(COURSE)).await.expect("first insert");
        let second = store
            .insert(&draft(CourseId::new(11)))
            .await
            .expect("second insert");

        assert_eq!(first.id(), EnrollmentId::new(1));
        assert_eq!(second.id(), EnrollmentId::new(2));
        assert_eq!(first.course().description(), "Distributed Systems");
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_pair(store: InMemoryEnrollmentStore) {
        store.insert(&draft(COURSE)).await.expect("first insert");

        let err = store
            .insert(&draft(COURSE))
            .await
            .expect_err("duplicate insert");

        assert_eq!(err, EnrollmentRepositoryError::duplicate(USER, COURSE));
        assert_eq!(store.enrollment_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn exists_for_tracks_inserts(store: InMemoryEnrollmentStore) {
        assert!(!store.exists_for(&USER, &COURSE).await.expect("lookup"));
        store.insert(&draft(COURSE)).await.expect("insert");
        assert!(store.exists_for(&USER, &COURSE).await.expect("lookup"));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_for_unknown_course_is_a_query_error(store: InMemoryEnrollmentStore) {
        let err = store
            .insert(&draft(CourseId::new(999)))
            .await
            .expect_err("unknown course");

        assert!(matches!(err, EnrollmentRepositoryError::Query { .. }));
        assert_eq!(store.enrollment_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn list_for_user_orders_by_id_and_filters_other_users(store: InMemoryEnrollmentStore) {
        store.add_user(UserId::new(2));
        store.insert(&draft(CourseId::new(11))).await.expect("insert");
        store
            .insert(&NewEnrollment {
                user_id: UserId::new(2),
                course_id: COURSE,
                status: EnrollmentStatus::Active,
            })
            .await
            .expect("insert other user");
        store.insert(&draft(COURSE)).await.expect("insert");

        let listed = store.list_for_user(&USER).await.expect("list");
        let ids: Vec<i32> = listed.iter().map(|e| e.id().get()).collect();

        assert_eq!(ids, [1, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_report_missing_records(store: InMemoryEnrollmentStore) {
        let user = UserRepository::find_by_id(&store, &UserId::new(999))
            .await
            .expect("lookup");
        let course = CourseRepository::find_by_id(&store, &CourseId::new(999))
            .await
            .expect("lookup");

        assert!(user.is_none());
        assert!(course.is_none());
    }
}
