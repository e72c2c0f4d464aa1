//! Persistence API contract
//!
//! Both operations are asynchronous and may fail; the editor spawns them on
//! the tokio runtime and receives the outcome through a channel.

use crate::error::PortalError;
use crate::types::{PasswordChangeRequest, ProfileRecord};
use futures::future::BoxFuture;

/// Backend that stores the member's profile and credentials
pub trait ProfileApi: Send + Sync {
    /// Persist the profile, returning the record as stored
    fn save(&self, profile: ProfileRecord) -> BoxFuture<'_, Result<ProfileRecord, PortalError>>;

    /// Change the member's password
    fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> BoxFuture<'_, Result<(), PortalError>>;
}
