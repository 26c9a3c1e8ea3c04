//! FIFO holding area for tasks that have not been dispatched yet.

use std::collections::VecDeque;

use super::{Task, TaskId, Transport};

/// Tasks waiting for capacity, in submission order.
pub struct AdmissionQueue<T: Transport> {
    tasks: VecDeque<Task<T>>,
}

impl<T: Transport> AdmissionQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Append a task to the tail.
    pub fn enqueue(&mut self, task: Task<T>) {
        self.tasks.push_back(task);
    }

    /// Remove and return up to `k` tasks from the head, oldest first.
    pub fn take_up_to(&mut self, k: usize) -> Vec<Task<T>> {
        let n = k.min(self.tasks.len());
        self.tasks.drain(..n).collect()
    }

    /// Number of waiting tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether a task with this id is waiting.
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id() == id)
    }

    /// Iterate waiting tasks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Task<T>> {
        self.tasks.iter()
    }
}

impl<T: Transport> Default for AdmissionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
