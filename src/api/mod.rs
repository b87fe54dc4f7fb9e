//! # Backend API
//!
//! Typed records for the todo/owner REST backend, the `TodoBackend` trait the
//! rest of the crate talks to, and the `reqwest` implementation of it.

pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, TodoBackend};
pub use client::HttpBackend;
pub use types::{OwnerRecord, TodoRecord};
