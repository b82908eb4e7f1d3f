mod badges;
mod banner;
mod roles;

use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Page, TextInput},
        constant::SITE_NAME,
    },
    model::profile::ProfileDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_profile;

use badges::BadgeList;
use banner::Banner;
use roles::RoleList;

#[component]
pub fn Profile(username: String) -> Element {
    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|username| async move {
        get_profile(&username).await.inspect_err(|err| {
            tracing::error!("Failed to fetch profile for {}: {}", username, err);
        })
    }));

    #[cfg(feature = "web")]
    let profile = match &*future.read() {
        Some(Ok(profile)) => Some(profile.clone()),
        _ => None,
    };

    #[cfg(not(feature = "web"))]
    let profile: Option<ProfileDto> = None;

    rsx! {
        Title { "{username} | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "bg-gray-800 rounded-lg shadow-lg text-white max-w-lg w-[400px] min-h-[520px]",
                if let Some(profile) = profile {
                    ProfileCard { profile }
                } else {
                    p {
                        class: "text-gray-400",
                        "User not found or loading..."
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileCard(profile: ProfileDto) -> Element {
    rsx!(div {
        class: "flex flex-col items-center pb-4",
        Banner { banner_url: profile.banner_url.clone() }
        img {
            src: "{profile.avatar_url}",
            alt: "User Avatar",
            width: 100,
            height: 100,
            class: "rounded-full -ml-[60%] -mt-16 border-sky-700 border-8",
        }
        h1 {
            class: "mt-2 mr-[65%] text-2xl font-semibold",
            "{profile.display_name}"
        }
        div {
            class: "flex -ml-[20%] mb-4",
            h2 {
                class: "text-md font-semibold mr-4",
                "{profile.tag}"
            }
            BadgeList { badges: profile.badges.clone() }
        }
        RoleList { roles: profile.roles.clone() }
        div {
            class: "w-full ml-7 mt-2",
            TextInput { placeholder: format!("msg {}", profile.username) }
        }
    })
}
