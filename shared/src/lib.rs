//! Host-independent core of the portfolio page.
//!
//! Everything here builds natively: the browser only shows up behind the
//! `VisibilitySource`, `Scheduler` and `RenderSink` traits, which the
//! `frontend` crate implements on top of `web-sys` and `gloo-timers`.

pub mod banner;
pub mod capabilities;
pub mod config;
pub mod counter;
pub mod metric_format;
pub mod triggers;
pub mod typewriter;
pub mod view_state;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testing;

pub use capabilities::{RenderSink, Scheduler};
pub use config::PortfolioConfig;
pub use counter::{AnimationRun, CounterAnimator, CounterPhase, CounterSpec, StaggerPlan, TICK_INTERVAL_MS};
pub use metric_format::MetricFormat;
pub use triggers::{register_counter_group, register_reveals};
pub use visibility::{
    EdgeMargin, SubscriptionId, VisibilityEntry, VisibilityGate, VisibilityOptions,
    VisibilitySource,
};
