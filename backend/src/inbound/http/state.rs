//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EnrollmentCommand, EnrollmentQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
}

impl HttpState {
    /// Construct state from the enrollment ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use enrollment_backend::domain::EnrollmentService;
    /// use enrollment_backend::inbound::http::state::HttpState;
    /// use enrollment_backend::outbound::memory::InMemoryEnrollmentStore;
    ///
    /// let store = Arc::new(InMemoryEnrollmentStore::new());
    /// let service = Arc::new(EnrollmentService::new(store.clone(), store.clone(), store));
    /// let state = HttpState::new(service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(
        enrollments: Arc<dyn EnrollmentCommand>,
        enrollments_query: Arc<dyn EnrollmentQuery>,
    ) -> Self {
        Self {
            enrollments,
            enrollments_query,
        }
    }
}
