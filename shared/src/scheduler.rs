use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Timer facility the animation runs on. Implementations run callbacks on
/// the same thread that scheduled them and never invoke a task synchronously
/// from inside `schedule_*`.
pub trait Scheduler {
    /// Runs `task` once after `delay`. The task fires even if the returned
    /// handle is dropped; only [`TaskHandle::cancel`] prevents it.
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Runs `task` every `period`, first after one full period, until the
    /// handle is cancelled.
    fn schedule_repeating(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;
}

/// Shared flag a scheduled callback checks before running.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Handle to a scheduled task. Cancelling is idempotent and safe from inside
/// the task's own callback.
#[derive(Clone, Default)]
pub struct TaskHandle {
    token: CancelToken,
    on_cancel: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Registers the cleanup that releases the underlying timer. Runs at most
    /// once, on the first `cancel`.
    pub fn set_on_cancel(&self, release: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            release();
            return;
        }
        *self.on_cancel.borrow_mut() = Some(Box::new(release));
    }

    /// Returns `true` if this call did the cancelling.
    pub fn cancel(&self) -> bool {
        if self.token.0.replace(true) {
            return false;
        }
        let release = self.on_cancel.borrow_mut().take();
        if let Some(release) = release {
            release();
        }
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeating { period: Duration, task: Box<dyn FnMut()> },
}

struct Entry {
    due: Duration,
    seq: u64,
    token: CancelToken,
    job: Job,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl Clock {
    fn push(&mut self, due: Duration, token: CancelToken, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, token, job });
    }

    fn pop_due(&mut self, until: Duration) -> Option<Entry> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(idx))
    }
}

/// Virtual-time scheduler. Nothing runs until [`ManualScheduler::advance`]
/// moves the clock; tasks then fire in due-time order, ties in scheduling
/// order. Used by tests and headless runs.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of scheduled tasks that have not fired (once) or been cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    pub fn advance(&self, by: Duration) {
        let until = self.clock.borrow().now + by;
        loop {
            let entry = {
                let mut clock = self.clock.borrow_mut();
                match clock.pop_due(until) {
                    Some(entry) => {
                        clock.now = entry.due;
                        entry
                    }
                    None => break,
                }
            };
            if entry.token.is_cancelled() {
                continue;
            }
            match entry.job {
                Job::Once(task) => task(),
                Job::Repeating { period, mut task } => {
                    task();
                    if !entry.token.is_cancelled() {
                        self.clock.borrow_mut().push(
                            entry.due + period,
                            entry.token,
                            Job::Repeating { period, task },
                        );
                    }
                }
            }
        }
        self.clock.borrow_mut().now = until;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn drop_cancelled(&self) {
        self.clock
            .borrow_mut()
            .entries
            .retain(|e| !e.token.is_cancelled());
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.push(due, handle.token(), Job::Once(task));
        drop(clock);
        let this = self.clone();
        handle.set_on_cancel(move || this.drop_cancelled());
        handle
    }

    fn schedule_repeating(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + period;
        clock.push(due, handle.token(), Job::Repeating { period, task });
        drop(clock);
        let this = self.clone();
        handle.set_on_cancel(move || this.drop_cancelled());
        handle
    }
}
