use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{NotFound, Profile};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/profile/:username")]
    Profile { username: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
