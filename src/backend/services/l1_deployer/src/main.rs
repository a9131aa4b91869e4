use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::info;

use l1_deployer::api::routes::{health, subnet_routes};
use l1_deployer::repositories::memory::InMemoryDeploymentRepository;
use l1_deployer::services::deployment::DeployerService;
use shared_utils::ThreadRngSource;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3001);

    let store = Arc::new(InMemoryDeploymentRepository::new());
    let service = web::Data::new(DeployerService::new(store, Arc::new(ThreadRngSource)));

    info!(port, "Starting l1_deployer service");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .service(subnet_routes())
            .route("/health", web::get().to(health))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
