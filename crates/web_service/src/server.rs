use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chat_core::{ChatConfig, ContextBuilder};
use log::{error, info, warn};
use openrouter_client::{ChatClientTrait, OpenRouterClient};

use crate::controllers::{chat_controller, system_controller};

pub struct AppState {
    pub chat_client: Arc<dyn ChatClientTrait>,
    pub context_builder: ContextBuilder,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(chat_controller::config)
            .configure(system_controller::config),
    );
}

pub async fn run(port: u16) -> Result<(), String> {
    info!("Starting web service...");

    let config = ChatConfig::new();
    if config.api_key.is_none() {
        warn!("OPENROUTER_API_KEY is not set; chat requests will fail with 500");
    }

    let context_builder = ContextBuilder::new(&config.system_prompt, config.history_window);
    let chat_client: Arc<dyn ChatClientTrait> = Arc::new(OpenRouterClient::new(config));

    let app_state = web::Data::new(AppState {
        chat_client,
        context_builder,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Web service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
