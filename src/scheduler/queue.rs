//! Deferred task queue
//!
//! Tasks are plain payloads with a deadline. Nothing runs on its own: the
//! owner pops due tasks from its event loop and handles them one at a time,
//! so no locking is involved.

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Instant;

/// Identifier of a scheduled task, unique within one queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Shared flag that stops a scheduled task from running
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Caller-side handle to a scheduled task
#[derive(Debug, Clone)]
pub struct TaskHandle {
    pub id: TaskId,
    pub due: Instant,
    token: CancellationToken,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// A task that has come due
#[derive(Debug)]
pub struct DueTask<T> {
    pub id: TaskId,
    pub due: Instant,
    pub payload: T,
}

struct Entry<T> {
    id: TaskId,
    due: Instant,
    token: CancellationToken,
    payload: T,
}

// BinaryHeap is a max-heap; invert so the earliest deadline (then lowest id)
// sits on top.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

/// Single-threaded queue of deferred tasks ordered by deadline
pub struct TaskQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to come due at `due`
    pub fn schedule(&mut self, due: Instant, payload: T) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let token = CancellationToken::new();
        self.heap.push(Entry {
            id,
            due,
            token: token.clone(),
            payload,
        });

        TaskHandle { id, due, token }
    }

    /// Remove and return the next task due at or before `now`
    ///
    /// Cancelled tasks are discarded without being returned. Tasks come out
    /// in deadline order; ties go to the task scheduled first.
    pub fn pop_due(&mut self, now: Instant) -> Option<DueTask<T>> {
        loop {
            let is_due = self.heap.peek().map(|e| e.due <= now)?;
            if !is_due {
                return None;
            }
            let entry = self.heap.pop()?;
            if entry.token.is_cancelled() {
                continue;
            }
            return Some(DueTask {
                id: entry.id,
                due: entry.due,
                payload: entry.payload,
            });
        }
    }

    /// Deadline of the earliest live task
    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .map(|e| e.due)
            .min()
    }

    /// Number of tasks still waiting to run (cancelled ones excluded)
    pub fn pending(&self) -> usize {
        self.heap.iter().filter(|e| !e.token.is_cancelled()).count()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Cancel every waiting task; returns how many were live
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for entry in self.heap.iter() {
            if !entry.token.is_cancelled() {
                entry.token.cancel();
                cancelled += 1;
            }
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_nothing_due_before_deadline() {
        let start = Instant::now();
        let mut queue = TaskQueue::new();
        queue.schedule(start + Duration::from_millis(100), "a");

        assert!(queue.pop_due(start).is_none());
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_pops_in_deadline_order() {
        let start = Instant::now();
        let mut queue = TaskQueue::new();
        queue.schedule(start + Duration::from_millis(300), "late");
        queue.schedule(start + Duration::from_millis(100), "early");
        queue.schedule(start + Duration::from_millis(100), "early-second");

        let now = start + Duration::from_millis(500);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(now))
            .map(|t| t.payload)
            .collect();
        assert_eq!(order, vec!["early", "early-second", "late"]);
        assert!(queue.is_idle());
    }

    #[test]
    fn test_cancelled_tasks_are_skipped() {
        let start = Instant::now();
        let mut queue = TaskQueue::new();
        let first = queue.schedule(start, 1);
        queue.schedule(start, 2);

        first.cancel();
        assert!(first.is_cancelled());
        assert_eq!(queue.pending(), 1);

        let task = queue.pop_due(start).unwrap();
        assert_eq!(task.payload, 2);
        assert!(queue.pop_due(start).is_none());
    }

    #[test]
    fn test_cancel_all() {
        let start = Instant::now();
        let mut queue = TaskQueue::new();
        queue.schedule(start, 'a');
        let b = queue.schedule(start, 'b');
        b.cancel();

        assert_eq!(queue.cancel_all(), 1);
        assert!(queue.is_idle());
        assert!(queue.next_deadline().is_none());
        assert!(queue.pop_due(start).is_none());
    }

    #[test]
    fn test_task_ids_are_sequential() {
        let start = Instant::now();
        let mut queue = TaskQueue::new();
        let a = queue.schedule(start, ());
        let b = queue.schedule(start, ());
        assert_eq!(a.id.value() + 1, b.id.value());
    }
}
