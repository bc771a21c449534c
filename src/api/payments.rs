// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Payment preparation endpoint.

use axum::{extract::State, Json};

use crate::{
    blockchain::{stage_payment_coin, TransactionStage},
    error::ApiError,
    models::{PreparePaymentRequest, PreparePaymentResponse},
    state::AppState,
};

/// Stage a coin worth exactly `amount` of `coin_type` from `owner`'s holdings.
///
/// Returns the unsigned merge/split commands and the handle of the resulting
/// coin. Nothing is signed or submitted. The coins are not reserved, so the
/// staged commands go stale as soon as any of the owner's coins change.
#[utoipa::path(
    post,
    path = "/v1/payments/prepare",
    tag = "Payments",
    request_body = PreparePaymentRequest,
    responses(
        (status = 200, description = "Payment coin staged", body = PreparePaymentResponse),
        (status = 400, description = "Invalid request"),
        (status = 422, description = "No coins found or insufficient balance"),
        (status = 503, description = "Sui node unavailable")
    )
)]
pub async fn prepare_payment(
    State(state): State<AppState>,
    Json(request): Json<PreparePaymentRequest>,
) -> Result<Json<PreparePaymentResponse>, ApiError> {
    let owner = request.owner.trim();
    if owner.is_empty() {
        return Err(ApiError::bad_request("Owner address is required"));
    }

    let coin_type = request.coin_type.trim();
    if coin_type.is_empty() {
        return Err(ApiError::bad_request("Coin type is required"));
    }

    let amount: u64 = request
        .amount
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Amount must be a whole number of base units"))?;

    let mut stage = TransactionStage::new();
    let coin = stage_payment_coin(state.coins.as_ref(), owner, coin_type, amount, &mut stage)
        .await?;

    tracing::info!(
        owner,
        coin_type,
        amount,
        commands = stage.commands().len(),
        "Staged payment coin"
    );

    Ok(Json(PreparePaymentResponse {
        owner: owner.to_string(),
        coin_type: coin_type.to_string(),
        amount: amount.to_string(),
        coin,
        stage,
    }))
}
