//! Async client for the Scylla Cloud account and cluster management API
//!
//! See [`cloud`] for the client itself and [`config`] for the persisted CLI
//! defaults.

pub mod cloud;
pub mod config;
pub mod output;

pub use cloud::{ApiError, ClientConfig, CloudClient};
