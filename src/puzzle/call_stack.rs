//! Visible recursion stack
//!
//! This module provides the call stack shown next to the towers:
//! - [`CallStack`]: the active invocations, oldest first
//! - [`CallFrame`]: one in-progress `hanoi(n, from, to, aux)` call
//!
//! Frames are pushed when a call begins and popped when it returns, so the
//! list mirrors the real recursion at every instant.

use super::PegId;
use crate::errors::HanoiError;
use std::fmt;

/// Activation record of one `hanoi(n, from, to, aux)` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFrame {
    pub n: u8,
    pub from: PegId,
    pub to: PegId,
    pub aux: PegId,
}

impl CallFrame {
    pub fn new(n: u8, from: PegId, to: PegId, aux: PegId) -> Self {
        CallFrame { n, from, to, aux }
    }

    /// The top-level call that moves the whole tower to the destination
    pub fn root(n: u8) -> Self {
        CallFrame::new(n, PegId::Source, PegId::Destination, PegId::Auxiliary)
    }

    /// First sub-call: clear the smaller disks onto the auxiliary peg
    pub fn clear_above(&self) -> Self {
        CallFrame::new(self.n - 1, self.from, self.aux, self.to)
    }

    /// Second sub-call: bring the smaller disks back on top of the moved one
    pub fn restack_onto(&self) -> Self {
        CallFrame::new(self.n - 1, self.aux, self.to, self.from)
    }
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hanoi({}, {}, {}, {})",
            self.n, self.from, self.to, self.aux
        )
    }
}

/// The call stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    peak_depth: usize,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new frame
    pub fn push(&mut self, frame: CallFrame) {
        self.frames.push(frame);
        self.peak_depth = self.peak_depth.max(self.frames.len());
    }

    /// Pop the most recent frame
    pub fn pop(&mut self) -> Result<CallFrame, HanoiError> {
        match self.frames.pop() {
            Some(frame) => Ok(frame),
            None => {
                debug_assert!(false, "call stack popped while empty");
                Err(HanoiError::UnbalancedStack)
            }
        }
    }

    /// Drop every frame and forget the peak depth
    pub fn clear(&mut self) {
        self.frames.clear();
        self.peak_depth = 0;
    }

    /// The most recent frame
    pub fn current(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// All frames, oldest first
    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }

    /// Frames for display, most recent first
    pub fn most_recent_first(&self) -> impl Iterator<Item = &CallFrame> {
        self.frames.iter().rev()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Deepest the stack has been since the last clear
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = CallStack::new();
        let root = CallFrame::root(3);
        stack.push(root);
        stack.push(root.clear_above());

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current(), Some(&root.clear_above()));
        assert_eq!(stack.pop().unwrap(), root.clear_above());
        assert_eq!(stack.current(), Some(&root));
        assert_eq!(stack.pop().unwrap(), root);
        assert!(stack.is_empty());
        assert_eq!(stack.current(), None);
        assert_eq!(stack.peak_depth(), 2);
    }

    #[test]
    fn test_sub_calls_swap_roles() {
        let root = CallFrame::root(3);
        assert_eq!(
            root.clear_above(),
            CallFrame::new(2, PegId::Source, PegId::Auxiliary, PegId::Destination)
        );
        assert_eq!(
            root.restack_onto(),
            CallFrame::new(2, PegId::Auxiliary, PegId::Destination, PegId::Source)
        );
    }

    #[test]
    fn test_display_uses_peg_names() {
        assert_eq!(
            CallFrame::root(4).to_string(),
            "hanoi(4, Source, Destination, Auxiliary)"
        );
    }

    #[test]
    fn test_most_recent_first() {
        let mut stack = CallStack::new();
        stack.push(CallFrame::root(2));
        stack.push(CallFrame::root(2).clear_above());

        let ns: Vec<u8> = stack.most_recent_first().map(|f| f.n).collect();
        assert_eq!(ns, vec![1, 2]);
    }

    #[test]
    fn test_clear_resets_peak() {
        let mut stack = CallStack::new();
        stack.push(CallFrame::root(1));
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peak_depth(), 0);
    }
}
