use actix_web::{web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};

use crate::models::catalog;
use crate::models::config::{SubnetConfiguration, TokenAllocation};
use crate::models::deployment::DeploymentState;
use crate::services::deployment::{DeployOutcome, DeployerService};
use crate::services::genesis::GenesisBuilder;
use crate::services::validation::ConfigValidator;
use crate::utils::errors::ServiceError;

pub fn subnet_routes() -> Scope {
    web::scope("/api/subnets")
        .route("/deploy", web::post().to(deploy_subnet))
        .route("/genesis", web::post().to(generate_genesis))
        .route("/validate", web::post().to(validate_configuration))
        .route("/status/{deployment_id}", web::get().to(deployment_status))
        .route("/deployments", web::get().to(list_deployments))
        .route("/available", web::get().to(available_subnets))
        .route("/info", web::get().to(subnet_info))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "service": "l1_deployer",
    }))
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

// Blocking findings go out as `errors`, advisory ones as `warnings`.
#[derive(Debug, Serialize)]
struct RejectedResponse {
    error: &'static str,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn error_response(err: ServiceError) -> HttpResponse {
    match &err {
        ServiceError::ConfigurationError(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone()))
        }
        ServiceError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new(err.to_string()))
        }
        ServiceError::DeploymentFailure(message) => {
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to deploy subnet".to_string(),
                details: Some(message.clone()),
            })
        }
        _ => HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string())),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeployRequest {
    config: Option<SubnetConfiguration>,
    wallet_address: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeployResponse {
    success: bool,
    deployment_id: String,
    subnet_id: String,
    rpc_url: String,
    explorer_url: String,
    status: DeploymentState,
}

async fn deploy_subnet(
    service: web::Data<DeployerService>,
    req: web::Json<DeployRequest>,
) -> HttpResponse {
    let DeployRequest {
        config,
        wallet_address,
    } = req.into_inner();
    let (Some(config), Some(wallet_address)) = (config, wallet_address) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Missing required fields: config and walletAddress",
        ));
    };

    match service.deploy_subnet(config, wallet_address).await {
        Ok(DeployOutcome::Deployed(record)) => HttpResponse::Ok().json(DeployResponse {
            success: true,
            deployment_id: record.id,
            subnet_id: record.subnet_id.unwrap_or_default(),
            rpc_url: record.rpc_url.unwrap_or_default(),
            explorer_url: record.explorer_url.unwrap_or_default(),
            status: record.status,
        }),
        Ok(DeployOutcome::Rejected(report)) => {
            HttpResponse::BadRequest().json(RejectedResponse {
                error: "Invalid configuration",
                errors: report.errors,
                warnings: report.warnings,
            })
        }
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct GenesisRequest {
    config: Option<SubnetConfiguration>,
    #[serde(default)]
    allocations: Vec<TokenAllocation>,
}

async fn generate_genesis(req: web::Json<GenesisRequest>) -> HttpResponse {
    let GenesisRequest {
        config,
        allocations,
    } = req.into_inner();
    let Some(config) = config else {
        return error_response(ServiceError::ConfigurationError(
            "Configuration is required".to_string(),
        ));
    };

    let genesis = GenesisBuilder::generate_genesis(&config, &allocations);
    HttpResponse::Ok().json(genesis)
}

#[derive(Debug, Deserialize)]
struct ValidateRequest {
    config: Option<SubnetConfiguration>,
}

async fn validate_configuration(req: web::Json<ValidateRequest>) -> HttpResponse {
    let Some(config) = req.into_inner().config else {
        return error_response(ServiceError::ConfigurationError(
            "Configuration is required".to_string(),
        ));
    };

    HttpResponse::Ok().json(ConfigValidator::validate(&config))
}

async fn deployment_status(
    service: web::Data<DeployerService>,
    path: web::Path<String>,
) -> HttpResponse {
    match service.deployment_status(&path.into_inner()).await {
        Ok(Some(status)) => HttpResponse::Ok().json(status),
        // Unknown ids are reported in-band rather than with a 404.
        Ok(None) => HttpResponse::Ok().json(serde_json::json!({
            "status": "not_found",
            "message": "Deployment not found",
        })),
        Err(err) => error_response(err),
    }
}

async fn available_subnets() -> HttpResponse {
    HttpResponse::Ok().json(catalog::AVAILABLE_SUBNETS)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubnetInfoQuery {
    chain_id: Option<String>,
}

async fn subnet_info(
    service: web::Data<DeployerService>,
    query: web::Query<SubnetInfoQuery>,
) -> HttpResponse {
    let Some(chain_id) = query.into_inner().chain_id else {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("chainId parameter required"));
    };

    match service.catalog_info(&chain_id) {
        Some(info) => HttpResponse::Ok().json(info),
        None => HttpResponse::NotFound().json(ErrorResponse::new("Subnet not found")),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentsQuery {
    wallet_address: Option<String>,
}

async fn list_deployments(
    service: web::Data<DeployerService>,
    query: web::Query<DeploymentsQuery>,
) -> HttpResponse {
    let Some(wallet_address) = query.into_inner().wallet_address else {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Wallet address is required"));
    };

    match service.list_deployments(&wallet_address).await {
        Ok(deployments) => HttpResponse::Ok().json(deployments),
        Err(err) => error_response(err),
    }
}
