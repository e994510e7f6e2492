//! HTTP inbound adapter exposing the enrollment REST endpoints.

pub mod enrollments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
