mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let discord_http = startup::setup_discord_http(&config);

        tracing::info!("Starting server for guild {}", config.discord_guild_id);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router().with_state(AppState::new(
            discord_http,
            config.discord_guild_id,
            config.discord_cdn_url.clone(),
        ));
        router = router.merge(server_routes);

        Ok(router)
    })
}
