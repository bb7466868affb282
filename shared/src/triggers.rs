//! Registration glue between the visibility gate and what it unlocks.

use crate::capabilities::Scheduler;
use crate::counter::{CounterAnimator, CounterSpec, StaggerPlan};
use crate::visibility::{SubscriptionId, VisibilityGate, VisibilityOptions, VisibilitySource};

/// Reveal each region once it scrolls into view. `reveal` receives the index
/// of the region in `regions`.
pub fn register_reveals<V, F>(
    gate: &mut VisibilityGate<V>,
    regions: &[V::Target],
    options: VisibilityOptions,
    reveal: F,
) -> Vec<SubscriptionId>
where
    V: VisibilitySource,
    F: Fn(usize) + Clone + 'static,
{
    regions
        .iter()
        .enumerate()
        .map(|(index, region)| {
            let reveal = reveal.clone();
            gate.register(region, options, move || reveal(index))
        })
        .collect()
}

/// Start a staggered counter group the first time `region` becomes visible.
/// An empty group registers nothing.
pub fn register_counter_group<V, S>(
    gate: &mut VisibilityGate<V>,
    region: &V::Target,
    options: VisibilityOptions,
    animator: &CounterAnimator<S>,
    counters: Vec<CounterSpec>,
    stagger: StaggerPlan,
) -> Option<SubscriptionId>
where
    V: VisibilitySource,
    S: Scheduler + 'static,
{
    if counters.is_empty() {
        return None;
    }
    let animator = animator.clone();
    Some(gate.register(region, options, move || {
        animator.animate_group(counters, stagger)
    }))
}
