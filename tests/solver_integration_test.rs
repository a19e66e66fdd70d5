// Integration tests for the animated recursive solver

mod common;

use common::{record_solve, RecordingPacer};
use hanoi_viz::puzzle::{
    canonical_moves, total_moves, CallFrame, Move, PegId, Phase, PuzzleState, MAX_DISKS,
};
use hanoi_viz::solver::{Animator, PauseKind, SolveOutcome, SolverControl};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_completed_solve_makes_minimum_moves() {
    for n in 1..=MAX_DISKS {
        let (state, pacer, outcome) = record_solve(n).await;

        assert_eq!(outcome, SolveOutcome::Completed);
        assert_eq!(state.pegs.move_count(), total_moves(n), "n = {}", n);
        assert_eq!(pacer.moves(n).len() as u64, total_moves(n), "n = {}", n);
    }
}

#[tokio::test]
async fn test_completed_solve_stacks_destination() {
    for n in 1..=MAX_DISKS {
        let (state, _, _) = record_solve(n).await;

        let expected: Vec<u8> = (1..=n).rev().collect();
        assert_eq!(state.pegs.peg(PegId::Destination), expected.as_slice());
        assert!(state.pegs.peg(PegId::Source).is_empty());
        assert!(state.pegs.peg(PegId::Auxiliary).is_empty());
        assert_eq!(state.phase, Phase::Completed);
        assert_eq!(state.narration, "Completed! All disks moved successfully!");
    }
}

#[tokio::test]
async fn test_animated_trace_matches_canonical_moves() {
    for n in 1..=6 {
        let (_, pacer, _) = record_solve(n).await;
        assert_eq!(pacer.moves(n), canonical_moves(n), "n = {}", n);
    }
}

#[tokio::test]
async fn test_call_stack_depth_bounded_and_balanced() {
    for n in 1..=MAX_DISKS {
        let state = PuzzleState::new(n).unwrap();
        assert!(state.call_stack.is_empty());

        let (state, pacer, _) = record_solve(n).await;

        assert!(pacer
            .observations
            .iter()
            .all(|o| o.frames.len() <= usize::from(n)));
        assert!(state.call_stack.is_empty(), "frames left for n = {}", n);
        assert_eq!(state.call_stack.peak_depth(), usize::from(n));
    }
}

#[tokio::test]
async fn test_every_call_pushes_exactly_once() {
    let n = 4;
    let (_, pacer, _) = record_solve(n).await;

    // One invocation per node of the recursion tree
    assert_eq!(pacer.pushes().len() as u64, total_moves(n));
}

#[tokio::test]
async fn test_frames_pushed_before_recursing() {
    let (_, pacer, _) = record_solve(3).await;
    let pushes = pacer.pushes();

    let root = CallFrame::root(3);
    assert_eq!(pushes[0].frames, vec![root]);
    assert_eq!(pushes[1].frames, vec![root, root.clear_above()]);
    assert_eq!(
        pushes[2].frames,
        vec![root, root.clear_above(), root.clear_above().clear_above()]
    );

    // No move has happened until the deepest call is reached
    assert!(pushes.iter().take(3).all(|o| o.pegs.move_count() == 0));
}

#[tokio::test]
async fn test_frames_popped_in_lifo_order() {
    let (_, pacer, _) = record_solve(3).await;

    // Between two pauses frames may only be popped from the top, followed
    // by at most one push onto the surviving prefix
    for pair in pacer.observations.windows(2) {
        let (before, after) = (&pair[0].frames, &pair[1].frames);
        let kept = before
            .iter()
            .zip(after.iter())
            .take_while(|(a, b)| a == b)
            .count();
        assert!(
            after.len() <= kept + 1,
            "stack changed below its top: {:?} -> {:?}",
            before,
            after
        );
    }
}

#[tokio::test]
async fn test_single_disk() {
    let (state, pacer, outcome) = record_solve(1).await;

    assert_eq!(outcome, SolveOutcome::Completed);
    assert_eq!(
        pacer.moves(1),
        vec![Move::new(PegId::Source, PegId::Destination)]
    );
    assert!(state.pegs.peg(PegId::Source).is_empty());
    assert_eq!(state.pegs.peg(PegId::Destination), &[1]);

    let frames: Vec<_> = pacer.observations.iter().map(|o| o.kind).collect();
    assert_eq!(frames, vec![PauseKind::CallPushed, PauseKind::DiskMoved]);
}

#[tokio::test]
async fn test_three_disks() {
    let (state, pacer, _) = record_solve(3).await;
    let moves = pacer.moves(3);

    assert_eq!(moves.len(), 7);
    // Odd disk counts send the smallest disk straight to the destination
    assert_eq!(moves[0], Move::new(PegId::Source, PegId::Destination));
    let first_move = pacer
        .observations
        .iter()
        .find(|o| o.kind == PauseKind::DiskMoved)
        .unwrap();
    assert_eq!(first_move.narration, "Moving disk 1 from Source to Destination");

    assert_eq!(state.pegs.peg(PegId::Destination), &[3, 2, 1]);
    assert!(state.pegs.peg(PegId::Source).is_empty());
    assert!(state.pegs.peg(PegId::Auxiliary).is_empty());
}

#[tokio::test]
async fn test_even_disk_count_starts_on_auxiliary() {
    for n in [2, 4, 6] {
        let (_, pacer, _) = record_solve(n).await;
        assert_eq!(
            pacer.moves(n)[0],
            Move::new(PegId::Source, PegId::Auxiliary),
            "n = {}",
            n
        );
    }
}

#[tokio::test]
async fn test_stop_after_first_move_then_reset() {
    let mut state = PuzzleState::new(4).unwrap();
    let control = SolverControl::new(500);
    let mut pacer = RecordingPacer::cancelling_after(&control, 1);

    let outcome = Animator::new(&mut state, &mut pacer, &control)
        .run()
        .await
        .unwrap();

    assert_eq!(outcome, SolveOutcome::Cancelled);
    assert_eq!(state.pegs.move_count(), 1);
    assert_eq!(pacer.moves(4).len(), 1);
    assert_eq!(state.phase, Phase::Stopped);
    assert_eq!(state.narration, "Stopped after 1 of 15 moves");
    // In-flight calls unwound and popped their own frames
    assert!(state.call_stack.is_empty());
    // Nothing was pushed after the cancel was observed
    assert_eq!(
        pacer.observations.last().map(|o| o.kind),
        Some(PauseKind::DiskMoved)
    );

    state.initialize(4).unwrap();
    assert_eq!(state, PuzzleState::new(4).unwrap());
    assert_eq!(state.pegs.peg(PegId::Source), &[4, 3, 2, 1]);
}

#[tokio::test]
async fn test_cancel_at_any_point_then_initialize_is_fresh() {
    let n = 5;
    for cut in 1..total_moves(n) {
        let mut state = PuzzleState::new(n).unwrap();
        let control = SolverControl::new(100);
        let mut pacer = RecordingPacer::cancelling_after(&control, cut);

        let outcome = Animator::new(&mut state, &mut pacer, &control)
            .run()
            .await
            .unwrap();
        assert_eq!(outcome, SolveOutcome::Cancelled);
        assert_eq!(state.pegs.move_count(), cut);
        assert!(state.pegs.check_invariants().is_ok());

        state.initialize(n).unwrap();
        assert_eq!(state, PuzzleState::new(n).unwrap(), "cut = {}", cut);
    }
}

#[tokio::test]
async fn test_cancel_before_start_is_cleared_by_run() {
    let mut state = PuzzleState::new(3).unwrap();
    let control = SolverControl::new(100);
    control.cancel();

    let mut pacer = RecordingPacer::new(&control);
    let outcome = Animator::new(&mut state, &mut pacer, &control)
        .run()
        .await
        .unwrap();

    assert_eq!(outcome, SolveOutcome::Completed);
    assert_eq!(state.pegs.move_count(), 7);
}

#[tokio::test]
async fn test_restart_after_cancel_runs_from_scratch() {
    let mut state = PuzzleState::new(3).unwrap();
    let control = SolverControl::new(100);

    let mut stopper = RecordingPacer::cancelling_after(&control, 3);
    let first = Animator::new(&mut state, &mut stopper, &control)
        .run()
        .await
        .unwrap();
    assert_eq!(first, SolveOutcome::Cancelled);

    let mut pacer = RecordingPacer::new(&control);
    let second = Animator::new(&mut state, &mut pacer, &control)
        .run()
        .await
        .unwrap();

    assert_eq!(second, SolveOutcome::Completed);
    assert_eq!(state.pegs.move_count(), 7);
    assert_eq!(pacer.moves(3), canonical_moves(3));
    // The first observation already reflects the reset
    assert_eq!(pacer.observations[0].pegs.move_count(), 0);
}

#[tokio::test]
async fn test_cancel_during_final_delay_still_completes() {
    let mut state = PuzzleState::new(2).unwrap();
    let control = SolverControl::new(100);
    let mut pacer = RecordingPacer::cancelling_after(&control, 3);

    let outcome = Animator::new(&mut state, &mut pacer, &control)
        .run()
        .await
        .unwrap();

    assert_eq!(outcome, SolveOutcome::Completed);
    assert!(state.pegs.is_solved());
}
