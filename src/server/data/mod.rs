//! Data access layer.
//!
//! There is no database: all profile data comes from Discord's REST API on every
//! request. Repositories wrap the external API and return domain models so Serenity
//! structures never leak into the service and controller layers.

pub mod discord;
