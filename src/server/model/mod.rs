//! Domain models for the profile pipeline.
//!
//! - `discord` - Request-scoped snapshots of Discord members, users and roles
//! - `badge` - Decoding of the `public_flags` bitfield into badge labels
//! - `profile` - Role merging and assembly of the render-ready profile

pub mod badge;
pub mod discord;
pub mod profile;
