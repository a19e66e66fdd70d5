//! Recursive solver and animator
//!
//! [`Animator`] runs the classical `hanoi(n, from, to, aux)` recursion with
//! every invocation made observable: a frame is pushed onto the visible call
//! stack before the call does any work and popped once it returns. Each push
//! and each move is followed by a pacing delay, so the stack shown to the
//! user is always the live recursion, never a replay of a precomputed list.
//!
//! # Order of events for `n > 1`
//!
//! ```text
//! push hanoi(n, from, to, aux)      pause (half delay)
//!   hanoi(n-1, from, aux, to)       smaller disks out of the way
//!   move from → to                  pause (full delay)
//!   hanoi(n-1, aux, to, from)       smaller disks back on top
//! pop
//! ```
//!
//! Steps are strictly sequential; each one awaits the previous.
//!
//! # Cancellation
//!
//! The shared flag in [`SolverControl`] is checked at the top of every call
//! and before every move. Once it is set no new frame is pushed and no disk
//! moves; calls already in flight unwind and pop their own frames. A delay in
//! progress is never cut short, so a stop takes effect within one pacing
//! interval.

use super::control::SolverControl;
use super::executor;
use super::pacer::{PauseKind, Pacer};
use crate::errors::HanoiError;
use crate::puzzle::state::COMPLETED_TEXT;
use crate::puzzle::{CallFrame, Move, Phase, PuzzleState};
use futures::future::{FutureExt, LocalBoxFuture};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every disk reached the destination peg
    Completed,
    /// The cancellation flag was observed before the last move
    Cancelled,
}

/// One animated run over a puzzle session
pub struct Animator<'a, P> {
    state: &'a mut PuzzleState,
    pacer: &'a mut P,
    control: SolverControl,
}

impl<'a, P: Pacer> Animator<'a, P> {
    pub fn new(state: &'a mut PuzzleState, pacer: &'a mut P, control: &SolverControl) -> Self {
        Animator {
            state,
            pacer,
            control: control.clone(),
        }
    }

    /// Reset the session, then move the whole tower from source to destination
    pub async fn run(mut self) -> Result<SolveOutcome, HanoiError> {
        let n = self.state.disk_count();
        self.control.rearm();
        self.state.initialize(n)?;
        self.state.phase = Phase::Running;
        tracing::info!(
            disks = n,
            total = self.state.pegs.total_moves(),
            speed_ms = self.control.speed_ms(),
            "solve started"
        );

        if let Err(e) = self.solve(CallFrame::root(n)).await {
            if e.is_logic_error() {
                tracing::error!(error = %e, "solver broke a puzzle invariant");
            } else {
                tracing::warn!(error = %e, "solve aborted");
            }
            self.state.phase = Phase::Stopped;
            self.state.narration = format!("Error: {}", e);
            return Err(e);
        }

        let pegs = &self.state.pegs;
        if self.control.is_cancelled() && !pegs.is_solved() {
            tracing::info!(
                moves = pegs.move_count(),
                total = pegs.total_moves(),
                "solve cancelled"
            );
            self.state.narration = format!(
                "Stopped after {} of {} moves",
                pegs.move_count(),
                pegs.total_moves()
            );
            self.state.phase = Phase::Stopped;
            return Ok(SolveOutcome::Cancelled);
        }

        debug_assert!(pegs.is_solved(), "run finished without solving");
        debug_assert!(self.state.call_stack.is_empty(), "frames left after run");
        tracing::info!(moves = pegs.move_count(), "solve completed");
        self.state.narration = COMPLETED_TEXT.to_string();
        self.state.phase = Phase::Completed;
        Ok(SolveOutcome::Completed)
    }

    /// One recursive invocation
    fn solve(&mut self, frame: CallFrame) -> LocalBoxFuture<'_, Result<(), HanoiError>> {
        async move {
            if self.control.is_cancelled() {
                return Ok(());
            }

            self.state.call_stack.push(frame);
            tracing::debug!(
                call = %frame,
                depth = self.state.call_stack.depth(),
                "frame pushed"
            );
            self.pacer
                .pause(&*self.state, PauseKind::CallPushed, self.control.call_delay())
                .await;

            if frame.n <= 1 {
                self.move_disk(frame).await?;
            } else {
                self.solve(frame.clear_above()).await?;
                self.move_disk(frame).await?;
                self.solve(frame.restack_onto()).await?;
            }

            let popped = self.state.call_stack.pop()?;
            debug_assert_eq!(popped, frame, "call stack popped out of order");
            tracing::debug!(call = %popped, "frame popped");
            Ok(())
        }
        .boxed_local()
    }

    async fn move_disk(&mut self, frame: CallFrame) -> Result<(), HanoiError> {
        executor::move_disk(
            &mut *self.state,
            &mut *self.pacer,
            &self.control,
            Move::new(frame.from, frame.to),
        )
        .await
        .map(|_| ())
    }
}
