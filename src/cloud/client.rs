//! Scylla Cloud client
//!
//! Ties the authenticated HTTP executor to the caller's account. A
//! [`CloudClient`] only exists once the default account has been resolved.

use super::account::{UserAccount, DEFAULT_ACCOUNT_PATH};
use super::error::Result;
use super::http::CloudHttpClient;
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://cloud.scylladb.com/api/v0";

/// Overall timeout applied to every call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings used to build a [`CloudClient`]
#[derive(Clone)]
pub struct ClientConfig {
    pub token: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Config for the production endpoint with the default timeout
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Main Scylla Cloud client
#[derive(Debug, Clone)]
pub struct CloudClient {
    http: CloudHttpClient,
    account: UserAccount,
}

impl CloudClient {
    /// Create a client and resolve the caller's default account
    ///
    /// Any failure of the account lookup is returned as-is and no client is
    /// produced.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let http = CloudHttpClient::new(&config.endpoint, &config.token, config.timeout)?;
        let account: UserAccount = http.get(DEFAULT_ACCOUNT_PATH).await?;

        tracing::info!(
            "Connected to {} as user {} in account {}",
            http.endpoint(),
            account.user_id,
            account.account_id
        );

        Ok(Self { http, account })
    }

    /// Account id every account-scoped call is made against
    pub fn account_id(&self) -> i64 {
        self.account.account_id
    }

    /// Account details resolved while connecting
    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    /// Fetch the caller's default account again
    pub async fn default_account(&self) -> Result<UserAccount> {
        self.http.get(DEFAULT_ACCOUNT_PATH).await
    }

    /// Underlying HTTP executor
    pub fn http(&self) -> &CloudHttpClient {
        &self.http
    }

    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}
