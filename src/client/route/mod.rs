pub mod not_found;
pub mod profile;

pub use not_found::NotFound;
pub use profile::Profile;
