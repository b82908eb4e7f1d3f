use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "bg-gray-900",
        Outlet::<Route> {}
    })
}
