//! Portal collaborator layer
//!
//! Everything the UI talks to but does not own:
//! - Profile persistence API (trait + simulated backend)
//! - Notification store
//! - Seed data loading
//! - Client-side validation run before any external call

pub mod api;
pub mod data;
pub mod simulated;
pub mod store;
pub mod validate;

pub use api::ProfileApi;
pub use data::PortalData;
pub use simulated::SimulatedBackend;
pub use store::NotificationStore;
