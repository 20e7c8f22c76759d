//! remote.it API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod remoteit;

pub use api::{AuthApi, DeviceApi};
#[cfg(test)]
pub use mock::MockRemoteItClient;
pub use remoteit::{DEFAULT_API_URL, RemoteItClient};

/// Full remote.it API surface.
///
/// Blanket-implemented for anything that implements every sub-trait, so the
/// session layer can take a single generic bound.
pub trait RemoteItApi: AuthApi + DeviceApi {}

impl<T: AuthApi + DeviceApi> RemoteItApi for T {}
