//! Error types for the puzzle core
//!
//! This module defines [`HanoiError`], which represents every failure the
//! puzzle core can report.
//!
//! The peg and call-stack variants are invariant violations: the recursive
//! solver never produces them when it is correct, so they indicate a logic
//! bug rather than a recoverable condition. They are returned (and
//! `debug_assert!`ed at the source) so that the run halts instead of
//! continuing with corrupt state.

use crate::puzzle::{Disk, PegId};
use std::io;
use thiserror::Error;

/// Errors that can occur while driving the puzzle
#[derive(Debug, Error)]
pub enum HanoiError {
    /// Attempted to take the top disk of an empty peg
    #[error("Cannot move from {peg}: peg is empty")]
    EmptyPeg { peg: PegId },

    /// Attempted to place a disk on top of a smaller one
    #[error("Cannot place disk {disk} on disk {top} at {peg}")]
    IllegalPlacement { disk: Disk, top: Disk, peg: PegId },

    /// Popped a call frame while no frame was active
    #[error("Call stack underflow: pop without a matching push")]
    UnbalancedStack,

    /// Disk count outside the range the store accepts
    #[error("Disk count {count} is out of range ({min}..={max})")]
    DiskCountOutOfRange { count: u8, min: u8, max: u8 },

    /// Terminal I/O failure while rendering or reading input
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl HanoiError {
    /// Whether this error is an invariant violation inside the solver
    pub fn is_logic_error(&self) -> bool {
        matches!(
            self,
            HanoiError::EmptyPeg { .. }
                | HanoiError::IllegalPlacement { .. }
                | HanoiError::UnbalancedStack
        )
    }
}
