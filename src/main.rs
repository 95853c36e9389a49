use actix_web::{App, HttpServer, middleware::Logger, web};
use brainrot::{config::Config, handlers, state::AppState};
use log::info;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let config = Config::from_env();

    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(std::io::Error::other)?;

    let state = Arc::new(AppState::new(config.clone(), client));

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│    Brainrot LinkedIn Post Generator       │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Server running at http://localhost:{port}");
    info!("Using completion server at: {}", config.chat_endpoint());
    info!("Model: {}", config.model);
    if config.api_key.is_none() {
        log::warn!("COHERE_API_KEY is not set, requests will be sent unauthenticated");
    }
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );
    info!("Temperature: {}", config.temperature);
    info!("Max tokens: {}", config.max_tokens);
    info!("\n=== ROUTES ===");
    info!("  POST /generate - generate a post from the form values");
    info!("  GET  /session  - current form, status and post card");
    info!("  GET  /share    - share link for the current post (?open=true redirects)");
    info!("  GET  /effects  - drain pending decorative effects");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
