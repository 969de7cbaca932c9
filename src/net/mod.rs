//! Networking modules for the server's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and maps responses onto `ActionFailure`;
//! `types` defines the JSON request/response bodies.

pub mod api;
pub mod types;
