//! Client SDK for the Employee Tracker REST backend.
//!
//! The entry point is [`SessionClient`], which owns the token pair for one
//! application lifetime and recovers from access-token expiry transparently:
//! a 401 triggers a single-flight refresh against `api/auth/refresh/`, and
//! every request that failed while the refresh was outstanding is replayed
//! once with the new token.

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod timer;

pub use api::client::SessionClient;
pub use api::types::*;
pub use config::ClientConfig;
pub use error::ApiError;
