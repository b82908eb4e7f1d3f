pub const SITE_NAME: &str = "Profile Card";
