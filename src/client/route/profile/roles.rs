use dioxus::prelude::*;

use crate::model::profile::RoleDto;

#[component]
pub fn RoleList(roles: Vec<RoleDto>) -> Element {
    rsx!(div {
        class: "mt-1 ml-[17%] text-left w-full",
        ul {
            class: "mt-2 flex flex-wrap",
            if roles.is_empty() {
                p {
                    class: "text-gray-400",
                    "No roles assigned."
                }
            }
            for role in roles {
                RoleChip { key: "{role.id}", role }
            }
        }
    })
}

#[component]
fn RoleChip(role: RoleDto) -> Element {
    rsx!(li {
        class: "mt-1 flex text-sm rounded-full mr-2 border-2 border-gray-400 p-1 items-center",
        // Roles without a color keep the neutral swatch
        if let Some(color) = role.color {
            div {
                class: "w-3 h-3 rounded-full mr-2",
                style: "background-color: {color};",
            }
        } else {
            div { class: "w-3 h-3 rounded-full mr-2" }
        }
        if let Some(emoji) = role.unicode_emoji {
            span {
                class: "mr-2",
                "{emoji}"
            }
        }
        "{role.name}"
    })
}
