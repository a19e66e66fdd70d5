//! Shared run controls
//!
//! [`SolverControl`] carries the two values the UI may change while a run is
//! in flight: the cancellation flag and the pacing delay. Clones share the
//! same underlying values.

use crate::puzzle::{MAX_SPEED_MS, MIN_SPEED_MS};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    speed_ms: AtomicU64,
}

/// Cancellation flag and pacing delay shared between the UI and the solver
#[derive(Debug, Clone)]
pub struct SolverControl {
    inner: Arc<Inner>,
}

impl SolverControl {
    pub fn new(speed_ms: u64) -> Self {
        SolverControl {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                speed_ms: AtomicU64::new(clamp_speed(speed_ms)),
            }),
        }
    }

    /// Ask the running solver to stop at its next check
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Clear the flag before a new run
    pub fn rearm(&self) {
        self.inner.cancelled.store(false, Ordering::SeqCst);
    }

    pub fn speed_ms(&self) -> u64 {
        self.inner.speed_ms.load(Ordering::Relaxed)
    }

    /// Set the pacing delay, clamped into the supported range
    pub fn set_speed_ms(&self, speed_ms: u64) -> u64 {
        let speed_ms = clamp_speed(speed_ms);
        self.inner.speed_ms.store(speed_ms, Ordering::Relaxed);
        speed_ms
    }

    /// Delay after every disk move
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.speed_ms())
    }

    /// Delay after every call-stack push
    pub fn call_delay(&self) -> Duration {
        Duration::from_millis(self.speed_ms() / 2)
    }
}

fn clamp_speed(speed_ms: u64) -> u64 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let control = SolverControl::new(500);
        let ui_side = control.clone();

        ui_side.cancel();
        assert!(control.is_cancelled());

        control.rearm();
        assert!(!ui_side.is_cancelled());
    }

    #[test]
    fn test_delays_derive_from_speed() {
        let control = SolverControl::new(500);
        assert_eq!(control.move_delay(), Duration::from_millis(500));
        assert_eq!(control.call_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_speed_is_clamped() {
        let control = SolverControl::new(5);
        assert_eq!(control.speed_ms(), MIN_SPEED_MS);
        assert_eq!(control.set_speed_ms(10_000), MAX_SPEED_MS);
    }
}
