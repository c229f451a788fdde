//! Scylla Cloud API interaction module
//!
//! # Module Structure
//!
//! - [`client`] - Main client; resolves the caller's account on connect
//! - [`http`] - Authenticated request executor
//! - [`decode`] - Response decoding and per-item envelope unwrapping
//! - [`error`] - Error type shared by every call
//! - [`account`], [`providers`], [`clusters`] - Resource types and accessors
//!
//! # Example
//!
//! ```no_run
//! use scylla_cloud::cloud::{ClientConfig, CloudClient};
//!
//! async fn example() -> scylla_cloud::cloud::Result<()> {
//!     let client = CloudClient::connect(ClientConfig::new("my-api-token")).await?;
//!     for cluster in client.list_clusters().await? {
//!         println!("{} {}", cluster.id, cluster.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod client;
pub mod clusters;
pub mod decode;
pub mod error;
pub mod http;
pub mod providers;

pub use account::UserAccount;
pub use client::{ClientConfig, CloudClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use clusters::{Cluster, DataCenter, FreeTier};
pub use error::{ApiError, Result};
pub use http::{ApiRequest, CloudHttpClient};
pub use providers::{CloudProvider, CloudProviderRegion};
