//! remote.it API data models
//!
//! Request bodies and response envelopes, organized by endpoint group.

mod auth;
mod connection;
mod device;

pub use auth::{Credentials, LoginRecord, LoginRequest};
pub use connection::{ConnectRequest, ConnectionGrant, ConnectionInfo};
pub use device::{DeviceEntry, DeviceList};
