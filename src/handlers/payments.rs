use crate::{
    error::GatewayError,
    models::{PaymentRecord, PaymentRequest, PaymentStatus},
    services::normalize,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use super::AppState;

pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentRecord>, GatewayError> {
    tracing::info!("Looking for payment {} in repository", id);

    let Ok(payment_id) = Uuid::parse_str(&id) else {
        return Err(GatewayError::PaymentNotFound(id));
    };

    state
        .repository
        .get(payment_id)
        .await
        .map(Json)
        .ok_or(GatewayError::PaymentNotFound(id))
}

pub async fn post_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentRecord>), GatewayError> {
    tracing::info!(payment = ?request, "Payment submitted");

    let bank_request = match normalize(&request, Utc::now()) {
        Ok(bank_request) => bank_request,
        Err(reason) => {
            tracing::warn!(%reason, "Payment rejected by validation");
            return Ok((StatusCode::BAD_REQUEST, Json(PaymentRecord::rejected(&request))));
        }
    };

    let status = state.bank.authorize(&bank_request).await?;
    let record = PaymentRecord::new(status, &request);

    if status == PaymentStatus::Rejected {
        return Ok((StatusCode::BAD_REQUEST, Json(record)));
    }

    state.repository.add(record.clone()).await;
    tracing::info!(payment_id = %record.id, %status, "Payment processed");

    Ok((StatusCode::OK, Json(record)))
}
