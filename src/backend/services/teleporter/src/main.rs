use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::info;

use shared_utils::ThreadRngSource;
use teleporter::routes::{health, icm_routes};
use teleporter::service::TeleporterService;
use teleporter::store::InMemoryMessageRepository;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3002);

    let store = Arc::new(InMemoryMessageRepository::new());
    let service = web::Data::new(TeleporterService::new(store, Arc::new(ThreadRngSource)));

    info!(port, "Starting teleporter service");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .service(icm_routes())
            .route("/health", web::get().to(health))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
