mod attendance;
mod auth;
pub mod client;
mod departments;
mod employees;
mod reports;
mod shifts;
pub mod types;

pub use client::*;
pub use types::*;
