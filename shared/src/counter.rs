//! Animated metric counters.
//!
//! A counter climbs linearly from 0 to its target in fixed 16 ms ticks and
//! always ends on the exact formatted target, whatever the float drift of the
//! accumulated increments.

use crate::capabilities::{RenderSink, Scheduler};
use crate::metric_format::MetricFormat;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// ~60 updates per second.
pub const TICK_INTERVAL_MS: u32 = 16;

// ===== SPEC =====

/// One animated metric: what to count to, how fast, and where to show it.
#[derive(Clone)]
pub struct CounterSpec {
    pub target: f64,
    pub duration_ms: u32,
    pub format: MetricFormat,
    pub sink: Rc<dyn RenderSink>,
    pub start_delay_ms: u32,
}

impl CounterSpec {
    /// Negative (and NaN) targets are clamped to zero.
    pub fn new(target: f64, duration_ms: u32, sink: Rc<dyn RenderSink>) -> Self {
        Self {
            target: target.max(0.0),
            duration_ms,
            format: MetricFormat::default(),
            sink,
            start_delay_ms: 0,
        }
    }

    pub fn with_format(mut self, format: MetricFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_start_delay(mut self, start_delay_ms: u32) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }
}

impl fmt::Debug for CounterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterSpec")
            .field("target", &self.target)
            .field("duration_ms", &self.duration_ms)
            .field("format", &self.format)
            .field("start_delay_ms", &self.start_delay_ms)
            .finish_non_exhaustive()
    }
}

// ===== RUN =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Done,
}

/// What one tick put on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub text: String,
    pub finished: bool,
}

/// Mutable progress of a single counter animation.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    target: f64,
    increment: f64,
    current: f64,
    format: MetricFormat,
    phase: CounterPhase,
}

impl AnimationRun {
    pub fn new(target: f64, duration_ms: u32, format: MetricFormat) -> Self {
        let target = target.max(0.0);
        let steps = f64::from(duration_ms) / f64::from(TICK_INTERVAL_MS);
        // Durations shorter than one tick reach the target on the first tick.
        let increment = if steps >= 1.0 { target / steps } else { target };
        Self {
            target,
            increment,
            current: 0.0,
            format,
            phase: CounterPhase::Idle,
        }
    }

    pub fn for_spec(spec: &CounterSpec) -> Self {
        Self::new(spec.target, spec.duration_ms, spec.format)
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Advance by one increment. Returns `None` once the run is done.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.phase == CounterPhase::Done {
            return None;
        }
        self.phase = CounterPhase::Running;
        self.current += self.increment;

        if self.current >= self.target {
            self.current = self.target;
            self.phase = CounterPhase::Done;
            Some(Tick {
                value: self.target,
                text: self.format.format(self.target),
                finished: true,
            })
        } else {
            let shown = self.current.floor();
            Some(Tick {
                value: shown,
                text: self.format.format(shown),
                finished: false,
            })
        }
    }
}

// ===== STAGGER =====

/// Delays the n-th counter of a group by `n * step_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaggerPlan {
    pub step_ms: u32,
}

impl StaggerPlan {
    pub fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.step_ms.saturating_mul(index)
    }
}

// ===== ANIMATOR =====

/// Starts counter runs on a host scheduler.
pub struct CounterAnimator<S: Scheduler> {
    scheduler: Rc<S>,
}

impl<S: Scheduler> Clone for CounterAnimator<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
        }
    }
}

impl<S: Scheduler + 'static> CounterAnimator<S> {
    pub fn new(scheduler: Rc<S>) -> Self {
        Self { scheduler }
    }

    /// Start `spec` once its start delay has elapsed. Runs cannot be stopped
    /// from outside; each one completes on its own.
    pub fn animate(&self, spec: CounterSpec) {
        if spec.start_delay_ms == 0 {
            start_run(&self.scheduler, spec);
            return;
        }
        let scheduler = Rc::clone(&self.scheduler);
        self.scheduler.after(
            spec.start_delay_ms,
            Box::new(move || start_run(&scheduler, spec)),
        );
    }

    /// Animate a group, overriding each start delay with the stagger plan.
    pub fn animate_group(&self, specs: impl IntoIterator<Item = CounterSpec>, plan: StaggerPlan) {
        for (index, spec) in specs.into_iter().enumerate() {
            self.animate(spec.with_start_delay(plan.delay_for(index)));
        }
    }
}

fn start_run<S: Scheduler + 'static>(scheduler: &Rc<S>, spec: CounterSpec) {
    let mut run = AnimationRun::for_spec(&spec);
    let sink = spec.sink;
    let interval: Rc<RefCell<Option<S::IntervalHandle>>> = Rc::new(RefCell::new(None));

    let on_tick = {
        let scheduler = Rc::clone(scheduler);
        let interval = Rc::clone(&interval);
        move || {
            let Some(tick) = run.tick() else {
                return;
            };
            sink.set_text(&tick.text);
            if tick.finished {
                let handle = interval.borrow_mut().take();
                if let Some(handle) = handle {
                    scheduler.cancel(handle);
                }
            }
        }
    };

    let handle = scheduler.every(TICK_INTERVAL_MS, Box::new(on_tick));
    *interval.borrow_mut() = Some(handle);
}
