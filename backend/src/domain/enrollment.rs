//! Enrollment entities and the read-only projection exposed to callers.
//!
//! Users and courses are owned elsewhere; this module only carries the
//! fields an enrollment needs to reference them. Identifiers are the integer
//! keys assigned by storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw storage key.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Return the raw storage key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier of a registered user.
    UserId
);
integer_id!(
    /// Identifier of a course.
    CourseId
);
integer_id!(
    /// Storage-assigned identifier of an enrollment.
    EnrollmentId
);

/// A registered user, referenced by enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
}

impl User {
    /// Build a user reference.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }
}

/// A course users can enroll in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    description: String,
}

impl Course {
    /// Build a course reference.
    pub fn new(id: CourseId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// Human-readable description, shown as the course name.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Error returned when a stored status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enrollment status: {0}")]
pub struct UnknownEnrollmentStatus(pub String);

/// Lifecycle state of an enrollment.
///
/// Only the initial state exists; enrollments never transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnrollmentStatus {
    /// The user is enrolled in the course.
    #[default]
    Active,
}

impl EnrollmentStatus {
    /// Canonical string form, used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = UnknownEnrollmentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            other => Err(UnknownEnrollmentStatus(other.to_owned())),
        }
    }
}

/// Insert draft for a new enrollment; storage assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
}

impl NewEnrollment {
    /// Draft an enrollment in the initial status.
    #[must_use]
    pub fn initial(user: &User, course: &Course) -> Self {
        Self {
            user_id: user.id(),
            course_id: course.id(),
            status: EnrollmentStatus::default(),
        }
    }
}

/// A persisted enrollment linking one user to one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    id: EnrollmentId,
    user: User,
    course: Course,
    status: EnrollmentStatus,
}

impl Enrollment {
    /// Assemble a persisted enrollment.
    #[must_use]
    pub fn new(id: EnrollmentId, user: User, course: Course, status: EnrollmentStatus) -> Self {
        Self {
            id,
            user,
            course,
            status,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EnrollmentId {
        self.id
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub const fn status(&self) -> EnrollmentStatus {
        self.status
    }
}

/// Flat snapshot of an enrollment for external consumers.
///
/// Serialises as
/// `{ "enrollmentId", "userId", "courseId", "courseName", "status" }`.
///
/// # Examples
/// ```
/// use enrollment_backend::domain::{
///     Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, EnrollmentView, User, UserId,
/// };
///
/// let enrollment = Enrollment::new(
///     EnrollmentId::new(7),
///     User::new(UserId::new(1)),
///     Course::new(CourseId::new(10), "Intro to Rust"),
///     EnrollmentStatus::Active,
/// );
/// let view = EnrollmentView::from(&enrollment);
/// assert_eq!(view.course_name, "Intro to Rust");
/// assert_eq!(view.status, "ACTIVE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentView {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub course_name: String,
    pub status: String,
}

impl From<&Enrollment> for EnrollmentView {
    fn from(value: &Enrollment) -> Self {
        Self {
            enrollment_id: value.id(),
            user_id: value.user().id(),
            course_id: value.course().id(),
            course_name: value.course().description().to_owned(),
            status: value.status().as_str().to_owned(),
        }
    }
}

impl From<Enrollment> for EnrollmentView {
    fn from(value: Enrollment) -> Self {
        Self::from(&value)
    }
}
