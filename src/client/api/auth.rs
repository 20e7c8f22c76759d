//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::LoginRecord;
use crate::error::Result;

/// Authentication operations for the remote.it API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange username and password for a session token
    async fn login(&self, api_key: &str, username: &str, password: &str) -> Result<LoginRecord>;
}
