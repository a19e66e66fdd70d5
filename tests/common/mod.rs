// Shared helpers for solver integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use hanoi_viz::puzzle::{CallFrame, Move, PegId, Pegs, PuzzleState};
use hanoi_viz::solver::{Animator, PauseKind, Pacer, SolveOutcome, SolverControl};
use std::time::Duration;

/// What the pacer saw at one pause
#[derive(Debug, Clone)]
pub struct Observation {
    pub kind: PauseKind,
    pub pegs: Pegs,
    pub frames: Vec<CallFrame>,
    pub narration: String,
}

/// Pacer that records every pause without sleeping
///
/// Optionally cancels the run once a given number of moves has been made.
pub struct RecordingPacer {
    pub observations: Vec<Observation>,
    control: SolverControl,
    cancel_after_moves: Option<u64>,
}

impl RecordingPacer {
    pub fn new(control: &SolverControl) -> Self {
        RecordingPacer {
            observations: Vec::new(),
            control: control.clone(),
            cancel_after_moves: None,
        }
    }

    pub fn cancelling_after(control: &SolverControl, moves: u64) -> Self {
        RecordingPacer {
            cancel_after_moves: Some(moves),
            ..Self::new(control)
        }
    }

    /// Moves in the order they happened, recovered from peg snapshots
    pub fn moves(&self, disks: u8) -> Vec<Move> {
        let mut previous = Pegs::new(disks).expect("valid disk count");
        let mut moves = Vec::new();
        for obs in &self.observations {
            if obs.kind != PauseKind::DiskMoved {
                continue;
            }
            let shrank = PegId::ALL
                .into_iter()
                .find(|&p| obs.pegs.peg(p).len() < previous.peg(p).len())
                .expect("a peg lost a disk");
            let grew = PegId::ALL
                .into_iter()
                .find(|&p| obs.pegs.peg(p).len() > previous.peg(p).len())
                .expect("a peg gained a disk");
            moves.push(Move::new(shrank, grew));
            previous = obs.pegs.clone();
        }
        moves
    }

    pub fn pushes(&self) -> Vec<&Observation> {
        self.observations
            .iter()
            .filter(|o| o.kind == PauseKind::CallPushed)
            .collect()
    }
}

#[async_trait(?Send)]
impl Pacer for RecordingPacer {
    async fn pause(&mut self, state: &PuzzleState, kind: PauseKind, _delay: Duration) {
        if let Err(msg) = state.pegs.check_invariants() {
            panic!("invariant broken at move {}: {}", state.pegs.move_count(), msg);
        }

        self.observations.push(Observation {
            kind,
            pegs: state.pegs.clone(),
            frames: state.call_stack.frames().to_vec(),
            narration: state.narration.clone(),
        });

        if let Some(limit) = self.cancel_after_moves {
            if state.pegs.move_count() >= limit {
                self.control.cancel();
            }
        }
    }
}

/// Run a full animated solve with a recording pacer
pub async fn record_solve(disks: u8) -> (PuzzleState, RecordingPacer, SolveOutcome) {
    let mut state = PuzzleState::new(disks).expect("valid disk count");
    let control = SolverControl::new(100);
    let mut pacer = RecordingPacer::new(&control);
    let outcome = Animator::new(&mut state, &mut pacer, &control)
        .run()
        .await
        .expect("solve failed");
    (state, pacer, outcome)
}
