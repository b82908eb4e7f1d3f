#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod profile;

#[cfg(feature = "web")]
pub use profile::get_profile;
