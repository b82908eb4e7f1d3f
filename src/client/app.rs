use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Discord guild member profile card"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
