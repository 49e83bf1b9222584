//! GitHub adapter
//!
//! reqwest-based implementation of the GitHubClient port.

pub mod client;

pub use client::GitHubClientImpl;
