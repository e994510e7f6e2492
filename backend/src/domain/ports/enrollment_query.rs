//! Driving port for reading a user's enrollments.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{EnrollmentView, Error, UserId};

/// Request listing the enrollments of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserEnrollmentsRequest {
    pub user_id: UserId,
}

/// Projected enrollments, in storage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserEnrollmentsResponse {
    pub enrollments: Vec<EnrollmentView>,
}

/// Driving port for enrollment reads.
///
/// Unknown users are not an error; they simply have no enrollments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// List the user's enrollments as flat views.
    async fn list_for_user(
        &self,
        request: ListUserEnrollmentsRequest,
    ) -> Result<ListUserEnrollmentsResponse, Error>;
}
