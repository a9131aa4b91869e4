use actix_web::{web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::models::NewMessage;
use crate::service::{TeleporterService, DEFAULT_GAS_LIMIT};

pub fn icm_routes() -> Scope {
    web::scope("/api/icm")
        .route("/send", web::post().to(send_message))
        .route("/status/{message_id}", web::get().to(message_status))
        .route("/history", web::get().to(message_history))
        .route("/stats", web::get().to(message_stats))
        .route("/analytics", web::get().to(message_analytics))
        .route("/estimate-fee", web::post().to(estimate_fee))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "service": "teleporter",
    }))
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(err: ServiceError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    match err {
        ServiceError::ValidationError(_) => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::StorageError(_) => HttpResponse::InternalServerError().json(body),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest {
    source_chain: Option<String>,
    destination_chain_id: Option<String>,
    recipient: Option<String>,
    message: Option<String>,
    amount: Option<String>,
    wallet_address: Option<String>,
}

async fn send_message(
    service: web::Data<TeleporterService>,
    req: web::Json<SendRequest>,
) -> HttpResponse {
    let SendRequest {
        source_chain,
        destination_chain_id,
        recipient,
        message,
        amount,
        wallet_address,
    } = req.into_inner();

    let (Some(destination_chain_id), Some(recipient), Some(message), Some(wallet_address)) =
        (destination_chain_id, recipient, message, wallet_address)
    else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing required fields".to_string(),
        });
    };

    // Shape check only; real address validation lives with the wallet layer
    if !recipient.starts_with("0x") || recipient.len() != 42 {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid recipient address".to_string(),
        });
    }

    let new_message = NewMessage {
        source_chain,
        destination_chain_id,
        recipient,
        message,
        amount,
        wallet_address,
    };

    match service.send_message(new_message).await {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(err) => error_response(err),
    }
}

async fn message_status(
    service: web::Data<TeleporterService>,
    path: web::Path<String>,
) -> HttpResponse {
    match service.message_status(&path.into_inner()).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryQuery {
    wallet_address: Option<String>,
}

async fn message_history(
    service: web::Data<TeleporterService>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse {
    let Some(wallet_address) = query.into_inner().wallet_address else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Wallet address is required".to_string(),
        });
    };

    match service.message_history(&wallet_address).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(err) => error_response(err),
    }
}

async fn message_stats(
    service: web::Data<TeleporterService>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse {
    let Some(wallet_address) = query.into_inner().wallet_address else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Wallet address is required".to_string(),
        });
    };

    match service.message_stats(&wallet_address).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_response(err),
    }
}

async fn message_analytics(
    service: web::Data<TeleporterService>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse {
    let Some(wallet_address) = query.into_inner().wallet_address else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Wallet address is required".to_string(),
        });
    };

    match service.message_analytics(&wallet_address).await {
        Ok(analytics) => HttpResponse::Ok().json(analytics),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EstimateFeeRequest {
    message_size: u64,
    gas_limit: Option<u64>,
}

async fn estimate_fee(
    service: web::Data<TeleporterService>,
    req: web::Json<EstimateFeeRequest>,
) -> HttpResponse {
    let EstimateFeeRequest {
        message_size,
        gas_limit,
    } = req.into_inner();

    let estimate = service.estimate_fee(message_size, gas_limit.unwrap_or(DEFAULT_GAS_LIMIT));
    HttpResponse::Ok().json(estimate)
}
