use dioxus::prelude::*;

#[component]
pub fn BadgeList(badges: Vec<String>) -> Element {
    rsx!(ul {
        class: "flex space-x-2",
        if badges.is_empty() {
            p {
                class: "text-gray-400",
                "No badges found."
            }
        }
        for badge in badges {
            li {
                key: "{badge}",
                class: "text-gray-300",
                span {
                    class: "bg-gray-700 px-2 py-1 rounded-full text-sm",
                    "{badge}"
                }
            }
        }
    })
}
