/*!
 * Ready Queue
 * FIFO of runnable processes used by round-robin
 */

use std::collections::VecDeque;

/// FIFO of process-table slots
///
/// A slot is queued at most once at any instant: a process is running,
/// queued, finished, or not yet admitted.
#[derive(Debug, Default, Clone)]
pub struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue at the tail
    pub fn push_back(&mut self, slot: usize) {
        debug_assert!(
            !self.slots.contains(&slot),
            "slot {slot} already present in ready queue"
        );
        self.slots.push_back(slot);
    }

    /// Dequeue from the head
    pub fn pop_front(&mut self) -> Option<usize> {
        self.slots.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(&slot)
    }

    /// Slots from head to tail
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }
}
