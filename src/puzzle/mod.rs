//! Puzzle data model
//!
//! This module provides the in-memory state the solver drives and the
//! renderer reads:
//! - [`pegs`]: the three pegs, the move counter and the expected total
//! - [`call_stack`]: the visible recursion stack of `hanoi(n, from, to, aux)` frames
//! - [`state`]: [`PuzzleState`], the bundle handed to the renderer
//!
//! # Peg Roles
//!
//! ```text
//! index  role         initial contents
//!   0    Source       [n, n-1, ..., 1]   (n at the bottom)
//!   1    Auxiliary    []
//!   2    Destination  []
//! ```
//!
//! Disks are identified only by their size (1 = smallest). Within a peg,
//! sizes strictly decrease from bottom to top.

pub mod call_stack;
pub mod pegs;
pub mod state;

pub use call_stack::{CallFrame, CallStack};
pub use pegs::Pegs;
pub use state::{Phase, PuzzleState};

use std::fmt;

/// A disk, identified by its size
pub type Disk = u8;

/// Smallest disk count offered by the UI
pub const MIN_DISKS: u8 = 1;

/// Largest disk count offered by the UI
pub const MAX_DISKS: u8 = 7;

/// Disk count used when nothing else is configured
pub const DEFAULT_DISKS: u8 = 3;

/// Largest disk count the peg store accepts (keeps `2^n - 1` inside `u64`)
pub const MAX_STORE_DISKS: u8 = 63;

/// Pacing delay bounds, in milliseconds
pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 2000;
pub const SPEED_STEP_MS: u64 = 100;
pub const DEFAULT_SPEED_MS: u64 = 500;

/// One of the three pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Source,
    Auxiliary,
    Destination,
}

impl PegId {
    pub const ALL: [PegId; 3] = [PegId::Source, PegId::Auxiliary, PegId::Destination];

    /// Position of the peg, left to right
    pub fn index(self) -> usize {
        match self {
            PegId::Source => 0,
            PegId::Auxiliary => 1,
            PegId::Destination => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PegId::Source => "Source",
            PegId::Auxiliary => "Auxiliary",
            PegId::Destination => "Destination",
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Move the top disk of `from` onto `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(from: PegId, to: PegId) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Minimum number of moves for `n` disks: `2^n - 1`
///
/// Saturates at `u64::MAX` for counts beyond [`MAX_STORE_DISKS`].
pub fn total_moves(n: u8) -> u64 {
    match 1u64.checked_shl(u32::from(n)) {
        Some(pow) => pow - 1,
        None => u64::MAX,
    }
}

/// The canonical recursive solution as a plain move list, without animation
///
/// Produces the same order as the animated solver: solve `n - 1` onto the
/// auxiliary peg, move the largest disk, solve `n - 1` onto the destination.
pub fn canonical_moves(n: u8) -> Vec<Move> {
    fn walk(n: u8, from: PegId, to: PegId, aux: PegId, out: &mut Vec<Move>) {
        if n == 0 {
            return;
        }
        walk(n - 1, from, aux, to, out);
        out.push(Move::new(from, to));
        walk(n - 1, aux, to, from, out);
    }

    let mut moves = Vec::new();
    walk(n, PegId::Source, PegId::Destination, PegId::Auxiliary, &mut moves);
    moves
}
