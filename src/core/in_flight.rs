//! Bookkeeping for tasks that have been claimed from the admission queue.

use serde::{Deserialize, Serialize};

use super::{Method, Task, TaskId, Transport};

/// Identity of a tracked task, detached from its callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Request method.
    pub method: Method,
    /// Target endpoint.
    pub endpoint: String,
    /// Whether the task has been handed to the transport.
    pub dispatched: bool,
}

impl TaskSummary {
    pub(crate) fn of<T: Transport>(task: &Task<T>, dispatched: bool) -> Self {
        Self {
            id: task.id(),
            method: task.request().method,
            endpoint: task.request().endpoint.clone(),
            dispatched,
        }
    }
}

/// One in-flight slot.
///
/// The task stays here until it is dispatched; after that only its summary
/// remains, until the transport reports completion.
struct InFlightEntry<T: Transport> {
    summary: TaskSummary,
    task: Option<Task<T>>,
}

/// Tasks occupying capacity, in claim order.
pub struct InFlightSet<T: Transport> {
    entries: Vec<InFlightEntry<T>>,
}

impl<T: Transport> InFlightSet<T> {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Track newly claimed tasks, not yet dispatched.
    pub fn admit(&mut self, tasks: Vec<Task<T>>) {
        self.entries.extend(tasks.into_iter().map(|task| InFlightEntry {
            summary: TaskSummary::of(&task, false),
            task: Some(task),
        }));
    }

    /// Flip every undispatched entry to dispatched and hand back its task.
    ///
    /// An entry is returned at most once over its lifetime.
    pub fn take_undispatched(&mut self) -> Vec<Task<T>> {
        self.entries
            .iter_mut()
            .filter(|entry| !entry.summary.dispatched)
            .filter_map(|entry| {
                entry.summary.dispatched = true;
                entry.task.take()
            })
            .collect()
    }

    /// Drop the entry with this id, wherever it sits.
    pub fn remove(&mut self, id: TaskId) -> Option<TaskSummary> {
        let pos = self.entries.iter().position(|e| e.summary.id == id)?;
        Some(self.entries.remove(pos).summary)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a task with this id occupies a slot.
    pub fn contains(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.summary.id == id)
    }

    /// Summaries of all occupied slots, in claim order.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.entries.iter().map(|e| e.summary.clone()).collect()
    }
}

impl<T: Transport> Default for InFlightSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
