//! Single-threaded deferred work
//!
//! - `Clock`: where "now" and "today" come from
//! - `TaskQueue`: deadline-ordered payloads with cancellation tokens

pub mod clock;
pub mod queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::{CancellationToken, DueTask, TaskHandle, TaskId, TaskQueue};
