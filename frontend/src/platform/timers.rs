use gloo_timers::callback::{Interval, Timeout};
use shared::Scheduler;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// `setInterval` / `setTimeout` scheduler.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    intervals: RefCell<HashMap<u64, Interval>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for BrowserScheduler {
    type IntervalHandle = u64;

    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let interval = Interval::new(interval_ms, callback);
        self.intervals.borrow_mut().insert(id, interval);
        id
    }

    fn cancel(&self, handle: u64) {
        // Dropping the `Interval` clears it; wasm-bindgen defers freeing the
        // closure when this runs from inside its own tick.
        let interval = self.intervals.borrow_mut().remove(&handle);
        drop(interval);
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }
}
