//! Time sources for the task queue
//!
//! The session never reads the wall clock directly. Production code uses
//! [`SystemClock`]; tests drive a [`ManualClock`] forward explicitly.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

/// Source of the current instant and calendar date
pub trait Clock {
    /// Monotonic "now", used for task deadlines
    fn now(&self) -> Instant;

    /// Today's date, stamped onto new expenses
    fn today(&self) -> NaiveDate;
}

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep a handle and
/// advance the clock the session is using.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
    today: Rc<Cell<NaiveDate>>,
}

impl ManualClock {
    /// Create a clock frozen at the given date
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            today: Rc::new(Cell::new(today)),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Time elapsed since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
