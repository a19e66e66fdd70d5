//! TUI pane rendering modules
//!
//! Every pane is a stateless function of the current [`PuzzleState`], so a
//! redraw after any change shows exactly what the solver has done so far.
//!
//! # Pane Modules
//!
//! - [`towers`]: the three pegs with their disks
//! - [`stack`]: the live recursion call stack, most recent call on top
//! - [`info`]: title, move counters, narration banner and the explanation panel
//! - [`status`]: status bar with keybindings and run phase
//!
//! [`PuzzleState`]: crate::puzzle::PuzzleState

pub mod info;
pub mod stack;
pub mod status;
pub mod towers;

// Re-export render functions for convenience
pub use info::{render_explanation, render_narration, render_stats_row, render_title};
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use towers::render_towers_pane;
