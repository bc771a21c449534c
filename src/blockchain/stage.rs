// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Programmable transaction staging.
//!
//! A [`TransactionStage`] is an append-only list of inputs and commands that
//! a caller assembles before handing the transaction off for gas selection,
//! signing and submission elsewhere. Nothing here talks to the network.
//!
//! Commands refer to values through [`Argument`] handles:
//!
//! - `GasCoin` - the coin paying for gas, always available
//! - `Input(i)` - the `i`-th entry of [`TransactionStage::inputs`]
//! - `Result(c)` - the single value produced by command `c`
//! - `NestedResult(c, j)` - the `j`-th value produced by command `c`

use serde::Serialize;

use super::types::ObjectRef;

/// Handle to a value usable as a command operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CallArg {
    /// An owned object at an exact version.
    Object(ObjectRef),
    /// BCS-encoded pure value.
    Pure(Vec<u8>),
}

/// A staged command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /// Merge every source coin into the destination coin.
    MergeCoins(Argument, Vec<Argument>),
    /// Split one new coin per amount off the source coin.
    SplitCoins(Argument, Vec<Argument>),
}

/// Errors raised while staging commands.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StageError {
    #[error("Too many transaction inputs (max {max})")]
    TooManyInputs { max: usize },

    #[error("Too many transaction commands (max {max})")]
    TooManyCommands { max: usize },

    #[error("Cannot merge a coin into itself")]
    SelfMerge,

    #[error("Cannot merge the same coin twice")]
    RepeatedMergeSource,
}

/// In-progress programmable transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionStage {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

impl TransactionStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &[CallArg] {
        &self.inputs
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.commands.is_empty()
    }

    /// Reference an owned object, reusing the existing input if the same
    /// object version was already added.
    pub fn obj(&mut self, object: ObjectRef) -> Result<Argument, StageError> {
        let existing = self
            .inputs
            .iter()
            .position(|input| matches!(input, CallArg::Object(o) if *o == object));
        match existing {
            Some(index) => Ok(Argument::Input(index as u16)),
            None => self.push_input(CallArg::Object(object)),
        }
    }

    /// Add a `u64` pure input (BCS: 8 little-endian bytes).
    pub fn pure_u64(&mut self, value: u64) -> Result<Argument, StageError> {
        self.push_input(CallArg::Pure(value.to_le_bytes().to_vec()))
    }

    /// Append a merge of `sources` into `destination`.
    pub fn merge_coins(
        &mut self,
        destination: Argument,
        sources: Vec<Argument>,
    ) -> Result<Argument, StageError> {
        if sources.contains(&destination) {
            return Err(StageError::SelfMerge);
        }
        if sources
            .iter()
            .enumerate()
            .any(|(i, source)| sources[..i].contains(source))
        {
            return Err(StageError::RepeatedMergeSource);
        }
        let command = self.push_command(Command::MergeCoins(destination, sources))?;
        Ok(Argument::Result(command))
    }

    /// Append a split of `amounts` off `source`, returning one handle per
    /// amount in order.
    pub fn split_coins(
        &mut self,
        source: Argument,
        amounts: &[u64],
    ) -> Result<Vec<Argument>, StageError> {
        let amount_args = amounts
            .iter()
            .map(|amount| self.pure_u64(*amount))
            .collect::<Result<Vec<_>, _>>()?;
        let count = amount_args.len();

        let command = self.push_command(Command::SplitCoins(source, amount_args))?;

        Ok((0..count)
            .map(|i| Argument::NestedResult(command, i as u16))
            .collect())
    }

    fn push_input(&mut self, arg: CallArg) -> Result<Argument, StageError> {
        let index = self.inputs.len();
        if index >= u16::MAX as usize {
            return Err(StageError::TooManyInputs {
                max: u16::MAX as usize,
            });
        }
        self.inputs.push(arg);
        Ok(Argument::Input(index as u16))
    }

    fn push_command(&mut self, command: Command) -> Result<u16, StageError> {
        let index = self.commands.len();
        if index >= u16::MAX as usize {
            return Err(StageError::TooManyCommands {
                max: u16::MAX as usize,
            });
        }
        self.commands.push(command);
        Ok(index as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::{ObjectDigest, ObjectId, SequenceNumber};

    fn object(id: &str, version: u64) -> ObjectRef {
        ObjectRef {
            object_id: ObjectId::from(id),
            version: SequenceNumber(version),
            digest: ObjectDigest::from("digest"),
        }
    }

    #[test]
    fn obj_deduplicates_same_version() {
        let mut stage = TransactionStage::new();
        let a = stage.obj(object("0x1", 3)).unwrap();
        let b = stage.obj(object("0x1", 3)).unwrap();
        let c = stage.obj(object("0x1", 4)).unwrap();

        assert_eq!(a, Argument::Input(0));
        assert_eq!(b, Argument::Input(0));
        assert_eq!(c, Argument::Input(1));
        assert_eq!(stage.inputs().len(), 2);
    }

    #[test]
    fn split_returns_nested_results_per_amount() {
        let mut stage = TransactionStage::new();
        let coins = stage.split_coins(Argument::GasCoin, &[10, 20]).unwrap();

        assert_eq!(
            coins,
            vec![Argument::NestedResult(0, 0), Argument::NestedResult(0, 1)]
        );
        assert_eq!(
            stage.commands(),
            &[Command::SplitCoins(
                Argument::GasCoin,
                vec![Argument::Input(0), Argument::Input(1)]
            )]
        );
        assert_eq!(stage.inputs()[0], CallArg::Pure(10u64.to_le_bytes().to_vec()));
        assert_eq!(stage.inputs()[1], CallArg::Pure(20u64.to_le_bytes().to_vec()));
    }

    #[test]
    fn merge_rejects_destination_in_sources() {
        let mut stage = TransactionStage::new();
        let a = stage.obj(object("0x1", 1)).unwrap();
        let b = stage.obj(object("0x2", 1)).unwrap();

        assert_eq!(stage.merge_coins(a, vec![b, a]), Err(StageError::SelfMerge));
        assert!(stage.commands().is_empty());
    }

    #[test]
    fn merge_rejects_repeated_source() {
        let mut stage = TransactionStage::new();
        let a = stage.obj(object("0x1", 1)).unwrap();
        let b = stage.obj(object("0x2", 1)).unwrap();
        let b_again = stage.obj(object("0x2", 1)).unwrap();

        assert_eq!(
            stage.merge_coins(a, vec![b, b_again]),
            Err(StageError::RepeatedMergeSource)
        );
        assert!(stage.commands().is_empty());
    }

    #[test]
    fn commands_are_numbered_in_append_order() {
        let mut stage = TransactionStage::new();
        let a = stage.obj(object("0x1", 1)).unwrap();
        let b = stage.obj(object("0x2", 1)).unwrap();

        assert_eq!(stage.merge_coins(a, vec![b]).unwrap(), Argument::Result(0));
        let split = stage.split_coins(a, &[5]).unwrap();
        assert_eq!(split, vec![Argument::NestedResult(1, 0)]);
    }

    #[test]
    fn new_stage_is_empty() {
        let stage = TransactionStage::new();
        assert!(stage.is_empty());
    }
}
