// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the REST API. All types derive `ToSchema`
//! for the OpenAPI document.
//!
//! Amounts travel as decimal strings of base units (MIST for SUI, the coin's
//! smallest unit otherwise) so that JavaScript clients never round them
//! through a float.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::{Argument, TransactionStage};

/// Request to stage a payment coin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreparePaymentRequest {
    /// Address whose coins fund the payment
    #[schema(example = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e")]
    pub owner: String,
    /// Fully qualified coin type
    #[schema(example = "0x2::sui::SUI")]
    pub coin_type: String,
    /// Amount in base units, as a decimal string
    #[schema(example = "1000000000")]
    pub amount: String,
}

/// Staged payment: the unsigned commands plus the handle of the paid coin.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreparePaymentResponse {
    pub owner: String,
    pub coin_type: String,
    /// Amount in base units, as a decimal string
    pub amount: String,
    /// Handle, within `stage`, of the coin worth exactly `amount`
    #[schema(value_type = Object)]
    pub coin: Argument,
    /// Staged inputs and commands
    #[schema(value_type = Object)]
    pub stage: TransactionStage,
}
