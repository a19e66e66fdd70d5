//! Animated recursive solver
//!
//! This module provides the logic that drives a puzzle session:
//! - [`animator`]: the recursive `hanoi(n, from, to, aux)` procedure with a live call stack
//! - [`executor`]: one validated disk move plus its narration and delay
//! - [`pacer`]: the suspension seam between the solver and whoever displays it
//! - [`control`]: the cancellation flag and pacing delay shared with the UI
//!
//! # Execution Model
//!
//! Single-threaded and cooperative. The only suspension points are the
//! pacing delays: half the configured speed after each call-stack push, the
//! full speed after each move. All mutation between two delays happens
//! synchronously, so the renderer always sees a consistent state.

pub mod animator;
pub mod control;
pub mod executor;
pub mod pacer;

pub use animator::{Animator, SolveOutcome};
pub use control::SolverControl;
pub use pacer::{NarratingPacer, PauseKind, Pacer, SleepPacer};
