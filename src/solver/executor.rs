//! Move executor
//!
//! Performs exactly one disk transfer, narrates it, then hands the pacing
//! delay to the [`Pacer`]. This is the only place the pegs are mutated
//! during a run.

use super::control::SolverControl;
use super::pacer::{PauseKind, Pacer};
use crate::errors::HanoiError;
use crate::puzzle::{Disk, Move, PuzzleState};

/// Narration line for a completed move
pub fn narrate(disk: Disk, mv: Move) -> String {
    format!("Moving disk {} from {} to {}", disk, mv.from, mv.to)
}

/// Move the top disk of `mv.from` onto `mv.to` and wait one full delay
///
/// Returns `Ok(None)` without touching the pegs if the run was cancelled
/// before the move.
pub async fn move_disk<P: Pacer>(
    state: &mut PuzzleState,
    pacer: &mut P,
    control: &SolverControl,
    mv: Move,
) -> Result<Option<Disk>, HanoiError> {
    if control.is_cancelled() {
        return Ok(None);
    }

    let disk = state.pegs.apply_move(mv.from, mv.to)?;
    state.narration = narrate(disk, mv);
    tracing::debug!(
        disk,
        from = %mv.from,
        to = %mv.to,
        move_count = state.pegs.move_count(),
        "disk moved"
    );

    pacer
        .pause(state, PauseKind::DiskMoved, control.move_delay())
        .await;
    Ok(Some(disk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PegId;
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Default)]
    struct CountingPacer {
        pauses: Vec<(PauseKind, Duration, u64)>,
    }

    #[async_trait(?Send)]
    impl Pacer for CountingPacer {
        async fn pause(&mut self, state: &PuzzleState, kind: PauseKind, delay: Duration) {
            self.pauses.push((kind, delay, state.pegs.move_count()));
        }
    }

    #[test]
    fn test_narration_text() {
        let mv = Move::new(PegId::Source, PegId::Destination);
        assert_eq!(narrate(2, mv), "Moving disk 2 from Source to Destination");
    }

    #[tokio::test]
    async fn test_move_disk_updates_state_then_pauses() {
        let mut state = PuzzleState::new(2).unwrap();
        let mut pacer = CountingPacer::default();
        let control = SolverControl::new(300);

        let disk = move_disk(
            &mut state,
            &mut pacer,
            &control,
            Move::new(PegId::Source, PegId::Auxiliary),
        )
        .await
        .unwrap();

        assert_eq!(disk, Some(1));
        assert_eq!(state.narration, "Moving disk 1 from Source to Auxiliary");
        assert_eq!(
            pacer.pauses,
            vec![(PauseKind::DiskMoved, Duration::from_millis(300), 1)]
        );
    }

    #[tokio::test]
    async fn test_cancelled_move_is_skipped() {
        let mut state = PuzzleState::new(2).unwrap();
        let mut pacer = CountingPacer::default();
        let control = SolverControl::new(300);
        control.cancel();

        let disk = move_disk(
            &mut state,
            &mut pacer,
            &control,
            Move::new(PegId::Source, PegId::Auxiliary),
        )
        .await
        .unwrap();

        assert_eq!(disk, None);
        assert_eq!(state, PuzzleState::new(2).unwrap());
        assert!(pacer.pauses.is_empty());
    }
}
