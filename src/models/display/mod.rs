//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names.

mod connection;
mod device;
mod login;

pub use connection::ConnectionDisplay;
pub use device::DeviceDisplay;
pub use login::LoginDisplay;
