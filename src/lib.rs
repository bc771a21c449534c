// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coin Stager - Sui payment coin preparation service
//!
//! This crate turns "pay `amount` of `coin_type` from `owner`" into the
//! unsigned programmable transaction commands that produce a coin worth
//! exactly that amount. It never signs or submits anything.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Sui coin queries, transaction staging, payment engine
//! - `config` - Environment configuration

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
