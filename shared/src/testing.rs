//! Deterministic fakes for the host capabilities.
//!
//! `ManualScheduler` runs a virtual clock that only moves on `advance`, so
//! animation tests can assert exact tick times without sleeping.

use crate::capabilities::{RenderSink, Scheduler};
use crate::visibility::{SubscriptionId, VisibilityOptions, VisibilitySource};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

// ===== TIMERS =====

enum Job {
    Once(Box<dyn FnOnce()>),
    Every {
        interval_ms: u64,
        callback: Box<dyn FnMut()>,
    },
}

struct Pending {
    id: u64,
    due: u64,
    job: Job,
}

#[derive(Default)]
pub struct ManualScheduler {
    now: Rc<Cell<u64>>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
    cancelled: RefCell<HashSet<u64>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn clock(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.now)
    }

    pub fn active_intervals(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|pending| matches!(pending.job, Job::Every { .. }))
            .count()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Move the clock forward, firing every job that falls due on the way in
    /// (due time, registration) order.
    pub fn advance(&self, ms: u64) {
        let deadline = self.now.get() + ms;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let index = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, job)| job.due <= deadline)
                    .min_by_key(|(_, job)| (job.due, job.id))
                    .map(|(index, _)| index);
                index.map(|index| pending.remove(index))
            };
            let Some(job) = next else { break };
            self.now.set(job.due);
            match job.job {
                Job::Once(callback) => callback(),
                Job::Every {
                    interval_ms,
                    mut callback,
                } => {
                    callback();
                    if !self.cancelled.borrow().contains(&job.id) {
                        self.pending.borrow_mut().push(Pending {
                            id: job.id,
                            due: job.due + interval_ms,
                            job: Job::Every {
                                interval_ms,
                                callback,
                            },
                        });
                    }
                }
            }
        }
        self.now.set(deadline);
    }

    fn push(&self, delay_ms: u64, job: Job) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().push(Pending {
            id,
            due: self.now.get() + delay_ms,
            job,
        });
        id
    }
}

impl Scheduler for ManualScheduler {
    type IntervalHandle = u64;

    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> u64 {
        let interval_ms = u64::from(interval_ms.max(1));
        self.push(
            interval_ms,
            Job::Every {
                interval_ms,
                callback,
            },
        )
    }

    fn cancel(&self, handle: u64) {
        self.pending.borrow_mut().retain(|pending| pending.id != handle);
        self.cancelled.borrow_mut().insert(handle);
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.push(u64::from(delay_ms), Job::Once(callback));
    }
}

// ===== SINKS =====

/// Keeps every write together with the virtual time it happened at.
pub struct RecordingSink {
    clock: Rc<Cell<u64>>,
    writes: RefCell<Vec<(u64, String)>>,
}

impl RecordingSink {
    pub fn new(scheduler: &ManualScheduler) -> Rc<Self> {
        Rc::new(Self {
            clock: scheduler.clock(),
            writes: RefCell::new(Vec::new()),
        })
    }

    pub fn texts(&self) -> Vec<String> {
        self.writes.borrow().iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().map(|(_, text)| text.clone())
    }

    pub fn first_write_at(&self) -> Option<u64> {
        self.writes.borrow().first().map(|(at, _)| *at)
    }
}

impl RenderSink for RecordingSink {
    fn set_text(&self, text: &str) {
        self.writes
            .borrow_mut()
            .push((self.clock.get(), text.to_string()));
    }
}

// ===== VISIBILITY =====

#[derive(Default)]
pub struct RecordingVisibility {
    pub observed: RefCell<Vec<(SubscriptionId, &'static str, VisibilityOptions)>>,
    pub unobserved: RefCell<Vec<SubscriptionId>>,
}

impl VisibilitySource for RecordingVisibility {
    type Target = &'static str;

    fn observe(&self, id: SubscriptionId, target: &&'static str, options: &VisibilityOptions) {
        self.observed.borrow_mut().push((id, *target, *options));
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.unobserved.borrow_mut().push(id);
    }
}
