//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user, course, and enrollment ports backed
//! by PostgreSQL via `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Admission rules live in the domain service.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures are mapped onto each
//!   port's `Connection`/`Query` variants; unique violations on insert become
//!   `Duplicate`.
//!
//! # Example
//!
//! ```no_run
//! use enrollment_backend::outbound::persistence::{
//!     DbPool, DieselEnrollmentRepository, PoolConfig,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/enrollment")).await?;
//! let repo = DieselEnrollmentRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_course_repository;
mod diesel_enrollment_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
