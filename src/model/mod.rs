pub mod api;
pub mod profile;
