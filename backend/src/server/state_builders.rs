//! Builders wiring the enrollment service onto its storage adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use enrollment_backend::domain::EnrollmentService;
use enrollment_backend::domain::ports::{
    CourseRepository, EnrollmentRepository, UserRepository,
};
use enrollment_backend::inbound::http::state::HttpState;
use enrollment_backend::outbound::memory::InMemoryEnrollmentStore;
use enrollment_backend::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselEnrollmentRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Type-erased admission service shared by the HTTP handlers.
type DynEnrollmentService =
    EnrollmentService<dyn UserRepository, dyn CourseRepository, dyn EnrollmentRepository>;

fn diesel_service(pool: &DbPool) -> DynEnrollmentService {
    let users: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool.clone()));
    let courses: Arc<dyn CourseRepository> = Arc::new(DieselCourseRepository::new(pool.clone()));
    let enrollments: Arc<dyn EnrollmentRepository> =
        Arc::new(DieselEnrollmentRepository::new(pool.clone()));
    EnrollmentService::new(users, courses, enrollments)
}

fn in_memory_service() -> DynEnrollmentService {
    let store = Arc::new(InMemoryEnrollmentStore::new());
    let users: Arc<dyn UserRepository> = store.clone();
    let courses: Arc<dyn CourseRepository> = store.clone();
    let enrollments: Arc<dyn EnrollmentRepository> = store;
    EnrollmentService::new(users, courses, enrollments)
}

/// Build HTTP state, using PostgreSQL when a pool is configured and the
/// in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = match &config.db_pool {
        Some(pool) => {
            info!("serving enrollments from PostgreSQL");
            Arc::new(diesel_service(pool))
        }
        None => {
            info!("no database configured; serving enrollments from the in-memory store");
            Arc::new(in_memory_service())
        }
    };
    web::Data::new(HttpState::new(service.clone(), service))
}
