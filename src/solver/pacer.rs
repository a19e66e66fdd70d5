//! Suspension points of the animation
//!
//! The solver never sleeps on its own. Every state change is followed by a
//! call to [`Pacer::pause`], which receives the current state by shared
//! reference and decides how to spend the delay: the terminal app redraws and
//! keeps reading keys, headless mode prints each move and sleeps, tests
//! record what they see.

use crate::puzzle::PuzzleState;
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

/// What just happened before a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// A frame was pushed onto the call stack (half delay)
    CallPushed,
    /// A disk was moved (full delay)
    DiskMoved,
}

/// Drives the pacing delay between observable steps
#[async_trait(?Send)]
pub trait Pacer {
    /// Suspend for `delay` after a state change
    ///
    /// Implementations must not return before the delay has elapsed if they
    /// want animation timing to stay faithful; the solver checks for
    /// cancellation only once this returns.
    async fn pause(&mut self, state: &PuzzleState, kind: PauseKind, delay: Duration);
}

/// Pacer that only sleeps on the tokio timer
#[derive(Debug, Default)]
pub struct SleepPacer;

#[async_trait(?Send)]
impl Pacer for SleepPacer {
    async fn pause(&mut self, _state: &PuzzleState, _kind: PauseKind, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}


/// Headless pacer: writes one line per move, then sleeps like [`SleepPacer`]
#[derive(Debug)]
pub struct NarratingPacer<W> {
    out: W,
    sleep: SleepPacer,
}

impl<W: Write> NarratingPacer<W> {
    pub fn new(out: W) -> Self {
        NarratingPacer {
            out,
            sleep: SleepPacer,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait(?Send)]
impl<W: Write> Pacer for NarratingPacer<W> {
    async fn pause(&mut self, state: &PuzzleState, kind: PauseKind, delay: Duration) {
        if kind == PauseKind::DiskMoved {
            let line = writeln!(
                self.out,
                "[{:>3}/{}] {}",
                state.pegs.move_count(),
                state.pegs.total_moves(),
                state.narration
            );
            if let Err(error) = line.and_then(|()| self.out.flush()) {
                tracing::warn!(%error, "cannot write move narration");
            }
        }
        self.sleep.pause(state, kind, delay).await;
    }
}
