//! Browser implementations of the core's host capabilities.
//!
//! - `visibility`: `IntersectionObserver` behind `shared::VisibilitySource`
//! - `timers`: `gloo-timers` behind `shared::Scheduler`

pub mod timers;
pub mod visibility;

pub use timers::BrowserScheduler;
pub use visibility::IntersectionSource;
