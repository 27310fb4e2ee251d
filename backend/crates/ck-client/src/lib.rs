//! ck-client library
//!
//! Typed HTTP client for the check-in backend REST API.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{BackendClient, ClientError, ClientResult, LoginOutcome};
