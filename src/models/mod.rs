//! Display models for CLI output

pub mod display;

pub use display::{ConnectionDisplay, DeviceDisplay, LoginDisplay};
