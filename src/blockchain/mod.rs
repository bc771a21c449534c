// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for Sui.
//!
//! This module provides functionality for:
//! - Paging through an owner's coins of one type over JSON-RPC
//! - Staging merge/split commands in a programmable transaction
//! - Carving an exact payment coin out of an owner's holdings

pub mod client;
pub mod payment;
pub mod source;
pub mod stage;
pub mod types;

pub use client::{SuiClientError, SuiRpcClient};
pub use payment::{stage_payment_coin, PaymentError};
pub use source::{coin_stream, CoinSource};
pub use stage::{Argument, CallArg, Command, StageError, TransactionStage};
pub use types::*;
