//! # Introduction
//!
//! hanoi-viz animates the recursive Tower of Hanoi solution in the terminal,
//! showing the recursion call stack live beside the pegs. Every call pushes
//! a `hanoi(n, from, to, aux)` frame before it does any work and pops it
//! when it returns, so the stack on screen is the real recursion at that
//! instant.
//!
//! ## Pipeline
//!
//! ```text
//! Settings → Animator → (push / move / pop) → PuzzleState → Pacer → TUI
//! ```
//!
//! 1. [`config`]: resolves disk count, pacing delay and logging from CLI,
//!    environment, TOML file and defaults.
//! 2. [`puzzle`]: the pegs, the visible call stack and the narration, bundled
//!    as [`puzzle::PuzzleState`].
//! 3. [`solver`]: the recursive [`solver::Animator`], the move executor, and
//!    the [`solver::Pacer`] seam every delay goes through.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Guarantees
//!
//! A completed run makes exactly `2^n - 1` moves, never places a larger disk
//! on a smaller one, and leaves the call stack empty. Stopping is
//! cooperative: it takes effect at the next call or move, after the current
//! delay has elapsed.

pub mod config;
pub mod errors;
pub mod puzzle;
pub mod solver;
pub mod ui;
