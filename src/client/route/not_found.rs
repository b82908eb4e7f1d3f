use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{component::Page, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-white",
            Icon {
                width: 48,
                height: 48,
                icon: FaDiscord
            }
            p {
                class: "text-2xl font-semibold",
                "Page not found"
            }
            p {
                class: "text-gray-400",
                "Nothing lives at /{path}. Profiles are at /profile/<username>."
            }
        }
    }
}
