use dioxus::prelude::*;

const FALLBACK_BANNER: Asset = asset!("/assets/fallback-banner.png");

/// Profile banner, swapped for the bundled fallback if the CDN image fails to load.
#[component]
pub fn Banner(banner_url: Option<String>) -> Element {
    // Keyed by URL so a failure only sticks to the banner that failed.
    let mut failed_url = use_signal(|| None::<String>);

    let Some(url) = banner_url else {
        return rsx!(div {
            class: "w-full h-52 bg-gray-600 rounded-lg mb-4 flex items-center justify-center text-white",
            "No Banner Available"
        });
    };

    let src = banner_src(&url, failed_url.read().as_deref(), &FALLBACK_BANNER.to_string());

    rsx!(img {
        src: "{src}",
        alt: "User Banner",
        width: 700,
        height: 200,
        class: "rounded-lg mb-4",
        style: "max-width: 100%; height: auto; border-radius: 8px;",
        onerror: move |_| failed_url.set(Some(url.clone())),
    })
}

/// Image source for `url`, or `fallback` if that same URL already failed to load.
fn banner_src(url: &str, failed_url: Option<&str>, fallback: &str) -> String {
    if failed_url == Some(url) {
        fallback.to_string()
    } else {
        url.to_string()
    }
}
