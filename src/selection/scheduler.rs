//! Deferred selection tasks
//!
//! Auto-selection must run after the view has observed a changed list, so
//! the controller posts it here instead of applying it inline. The host
//! drains the queue once per event-loop tick, after rendering.

use std::collections::VecDeque;

/// A selection update scheduled for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Select the first item of the list visible when the task runs
    SelectFirst,
}

/// FIFO of pending tasks; posting a task that is already pending is a no-op
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: VecDeque<DeferredTask>,
}

impl TaskQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task for the next tick
    pub fn post(&mut self, task: DeferredTask) {
        if !self.pending.contains(&task) {
            self.pending.push_back(task);
        }
    }

    /// Take every pending task, leaving the queue empty
    pub fn drain(&mut self) -> Vec<DeferredTask> {
        self.pending.drain(..).collect()
    }

    /// Whether any task is waiting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_coalesces_duplicates() {
        let mut queue = TaskQueue::new();
        queue.post(DeferredTask::SelectFirst);
        queue.post(DeferredTask::SelectFirst);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = TaskQueue::new();
        queue.post(DeferredTask::SelectFirst);

        assert_eq!(queue.drain(), vec![DeferredTask::SelectFirst]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
