//! In-memory stand-in for the portal's HTTP API
//!
//! Each call waits a fixed latency before answering. Failures can be
//! injected to exercise the editor's error paths.

use crate::config::{BackendOptions, FailureMode};
use crate::error::{PortalError, ValidationError};
use crate::portal::api::ProfileApi;
use crate::types::{PasswordChangeRequest, ProfileRecord};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug)]
struct BackendState {
    profile: ProfileRecord,
    password: String,
    failure: FailureMode,
}

/// Simulated profile backend
#[derive(Debug)]
pub struct SimulatedBackend {
    latency: Duration,
    state: Mutex<BackendState>,
}

impl SimulatedBackend {
    pub fn new(profile: ProfileRecord, password: impl Into<String>, options: &BackendOptions) -> Self {
        Self {
            latency: Duration::from_millis(options.latency_ms),
            state: Mutex::new(BackendState {
                profile,
                password: password.into(),
                failure: options.failure,
            }),
        }
    }

    /// Change how subsequent calls fail
    pub fn set_failure(&self, failure: FailureMode) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = failure;
        }
    }

    /// The profile as last persisted
    pub fn stored_profile(&self) -> Option<ProfileRecord> {
        self.state.lock().ok().map(|s| s.profile.clone())
    }

    fn injected_failure(failure: FailureMode) -> Result<(), PortalError> {
        match failure {
            FailureMode::None => Ok(()),
            FailureMode::Network => Err(PortalError::Network("Request timed out".into())),
            FailureMode::Auth => Err(PortalError::Auth("Session expired".into())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BackendState>, PortalError> {
        self.state
            .lock()
            .map_err(|_| PortalError::Network("Backend unavailable".into()))
    }

    async fn persist(&self, profile: ProfileRecord) -> Result<ProfileRecord, PortalError> {
        tokio::time::sleep(self.latency).await;

        let mut state = self.lock()?;
        Self::injected_failure(state.failure)?;

        // Email and role are owned by the server
        let stored = ProfileRecord {
            email: state.profile.email.clone(),
            role: state.profile.role.clone(),
            ..profile
        };
        state.profile = stored.clone();
        info!(name = %stored.display_name(), "profile persisted");
        Ok(stored)
    }

    async fn replace_password(&self, request: PasswordChangeRequest) -> Result<(), PortalError> {
        tokio::time::sleep(self.latency).await;

        let mut state = self.lock()?;
        Self::injected_failure(state.failure)?;

        if request.current_password != state.password {
            debug!("password change rejected: current password mismatch");
            return Err(ValidationError::IncorrectPassword.into());
        }
        state.password = request.new_password;
        info!("password changed");
        Ok(())
    }
}

impl ProfileApi for SimulatedBackend {
    fn save(&self, profile: ProfileRecord) -> BoxFuture<'_, Result<ProfileRecord, PortalError>> {
        self.persist(profile).boxed()
    }

    fn change_password(
        &self,
        request: PasswordChangeRequest,
    ) -> BoxFuture<'_, Result<(), PortalError>> {
        self.replace_password(request).boxed()
    }
}
