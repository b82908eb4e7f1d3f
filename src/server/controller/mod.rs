//! HTTP request handlers.
//!
//! Controllers extract request data, build services from the shared `AppState`,
//! and convert domain models into DTOs for the response.

pub mod profile;
