//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login
//! - [`DeviceApi`] - Device listing and proxy connections
//!
//! The [`RemoteItApi`](super::RemoteItApi) super-trait combines both.

mod auth;
mod device;

pub use auth::AuthApi;
pub use device::DeviceApi;
