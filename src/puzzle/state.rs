//! Combined puzzle state
//!
//! [`PuzzleState`] bundles everything the renderer consumes: the pegs, the
//! visible call stack, the narration line and the run phase. The solver
//! mutates it between pacing delays; the renderer only ever sees it through
//! a shared reference.

use super::{CallStack, Pegs};
use crate::errors::HanoiError;

/// Narration shown before a run starts
pub const READY_TEXT: &str = "Ready to start!";

/// Narration shown after a full solve
pub const COMPLETED_TEXT: &str = "Completed! All disks moved successfully!";

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Stopped,
    Completed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "READY",
            Phase::Running => "RUNNING",
            Phase::Stopped => "STOPPED",
            Phase::Completed => "DONE",
        }
    }
}

/// State of one puzzle session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pub pegs: Pegs,
    pub call_stack: CallStack,
    pub narration: String,
    pub phase: Phase,
}

impl PuzzleState {
    /// Create a fresh session with `n` disks
    pub fn new(n: u8) -> Result<Self, HanoiError> {
        Ok(PuzzleState {
            pegs: Pegs::new(n)?,
            call_stack: CallStack::new(),
            narration: READY_TEXT.to_string(),
            phase: Phase::Ready,
        })
    }

    /// Reset every field for `n` disks
    pub fn initialize(&mut self, n: u8) -> Result<(), HanoiError> {
        self.pegs.initialize(n)?;
        self.call_stack.clear();
        self.narration = READY_TEXT.to_string();
        self.phase = Phase::Ready;
        tracing::debug!(disks = n, total = self.pegs.total_moves(), "puzzle initialized");
        Ok(())
    }

    pub fn disk_count(&self) -> u8 {
        self.pegs.disk_count()
    }
}
