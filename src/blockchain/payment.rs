// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Payment coin staging.
//!
//! Given an owner, a coin type and an amount, [`stage_payment_coin`] appends
//! the commands that produce a coin worth exactly that amount and returns the
//! handle to it:
//!
//! - **Native SUI**: split the amount off the gas coin. No query is made;
//!   whether gas covers it is only known when the transaction is dry-run.
//! - **Any other coin type**: read every page of the owner's coins, merge all
//!   of them into the first one observed, then split the amount off that.
//!
//! ## Caveats
//!
//! All pages are read even when the first already covers the amount.
//!
//! Coins are not reserved. Two calls for the same owner and coin type on one
//! stage, before that stage is executed, will both merge and split the same
//! coins. Callers must execute the stage or serialize such calls.

use std::collections::HashSet;

use futures::TryStreamExt;

use super::client::SuiClientError;
use super::source::{coin_stream, CoinSource};
use super::stage::{Argument, StageError, TransactionStage};
use super::types::{is_native_coin, CoinRecord, ObjectId};

/// Errors returned by [`stage_payment_coin`].
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("No {coin_type} coins found for {owner}")]
    NoCoinsFound { owner: String, coin_type: String },

    #[error("Insufficient {coin_type} balance: have {available}, need {requested}")]
    InsufficientBalance {
        coin_type: String,
        available: u128,
        requested: u64,
    },

    #[error("Coin {object_id} listed more than once")]
    DuplicateCoin { object_id: ObjectId },

    #[error(transparent)]
    Client(#[from] SuiClientError),

    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Stage a coin of `coin_type` worth exactly `amount`, owned by `owner`.
///
/// On error the stage is left exactly as it was passed in.
pub async fn stage_payment_coin<S>(
    source: &S,
    owner: &str,
    coin_type: &str,
    amount: u64,
    stage: &mut TransactionStage,
) -> Result<Argument, PaymentError>
where
    S: CoinSource + ?Sized,
{
    if is_native_coin(coin_type) {
        tracing::debug!(owner, amount, "Splitting payment from gas coin");
        return split_one(stage, Argument::GasCoin, amount);
    }

    let coins: Vec<CoinRecord> = coin_stream(source, owner, coin_type).try_collect().await?;

    let mut seen = HashSet::with_capacity(coins.len());
    if let Some(repeated) = coins.iter().find(|coin| !seen.insert(&coin.coin_object_id)) {
        return Err(PaymentError::DuplicateCoin {
            object_id: repeated.coin_object_id.clone(),
        });
    }

    let total: u128 = coins.iter().map(|coin| u128::from(coin.balance)).sum();

    tracing::debug!(
        owner,
        coin_type,
        coins = coins.len(),
        total = %total,
        amount,
        "Collected coins for payment"
    );

    let Some((primary, others)) = coins.split_first() else {
        return Err(PaymentError::NoCoinsFound {
            owner: owner.to_string(),
            coin_type: coin_type.to_string(),
        });
    };

    if total < u128::from(amount) {
        return Err(PaymentError::InsufficientBalance {
            coin_type: coin_type.to_string(),
            available: total,
            requested: amount,
        });
    }

    // Stage on a copy so a staging error cannot leave half the commands behind.
    let mut draft = stage.clone();
    let primary_arg = draft.obj(primary.object_ref())?;
    if !others.is_empty() {
        let other_args = others
            .iter()
            .map(|coin| draft.obj(coin.object_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        draft.merge_coins(primary_arg, other_args)?;
    }
    let coin = split_one(&mut draft, primary_arg, amount)?;

    *stage = draft;
    Ok(coin)
}

fn split_one(
    stage: &mut TransactionStage,
    source: Argument,
    amount: u64,
) -> Result<Argument, PaymentError> {
    let mut coins = stage.split_coins(source, &[amount])?;
    // One amount in, one handle out.
    Ok(coins.remove(0))
}
