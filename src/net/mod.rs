//! Networking for the signal backend.
//!
//! `types` holds the JSON DTOs and `api` the HTTP calls behind the
//! [`api::SignalBackend`] seam.

pub mod api;
pub mod types;
