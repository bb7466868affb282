//! Host capabilities consumed by the animation core.
//!
//! The browser supplies real implementations (`gloo-timers`, DOM text nodes);
//! tests substitute the fakes from `crate::testing`.

/// Anything that can display the text of one metric.
///
/// The core only ever writes to a sink, it never reads back.
pub trait RenderSink {
    fn set_text(&self, text: &str);
}

/// Single-threaded timer facility.
///
/// Callbacks run on the host event loop, never re-entrantly with the caller
/// of `every`/`after`. A recurring callback never overlaps itself.
pub trait Scheduler {
    type IntervalHandle: 'static;

    /// Invoke `callback` every `interval_ms` until cancelled.
    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> Self::IntervalHandle;

    /// Stop a recurring callback. Safe to call from inside that callback.
    fn cancel(&self, handle: Self::IntervalHandle);

    /// Invoke `callback` once after `delay_ms`.
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}
