//! Domain primitives, ports, and the admission service.
//!
//! Purpose: Define strongly typed enrollment entities used by the HTTP and
//! persistence adapters, together with the ports those adapters implement.
//! Keep types immutable and document serialisation contracts (serde) in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Enrollment / EnrollmentView: persisted aggregate and its flat projection.
//! - EnrollmentService: admission rules behind the driving ports.

pub mod enrollment;
pub mod enrollment_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::enrollment::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, EnrollmentView, NewEnrollment,
    UnknownEnrollmentStatus, User, UserId,
};
pub use self::enrollment_service::{
    AdmissionError, AdmissionErrorKind, EnrollmentService, StorageFailure,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use enrollment_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("course 10 not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
