//! Fire-once visibility triggers.
//!
//! `VisibilityGate` wraps a host visibility source (the browser's
//! `IntersectionObserver`) and turns its stream of intersection notifications
//! into a single "became visible" callback per registered target. A target is
//! unobserved the moment it fires and is never reused.

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Slack for hosts that report a crossing ratio a hair below the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

// ===== OPTIONS =====

/// Grows (positive) or shrinks (negative) the viewport edges, in pixels,
/// before visibility is measured.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EdgeMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl EdgeMargin {
    pub fn bottom(bottom: i32) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }

    /// CSS margin shorthand, e.g. `"0px 0px -100px 0px"`.
    pub fn to_root_margin(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct VisibilityOptions {
    /// Fraction of the target's area that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    pub edge_margin: EdgeMargin,
}

impl VisibilityOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            edge_margin: EdgeMargin::default(),
        }
        .clamped()
    }

    pub fn with_edge_margin(mut self, edge_margin: EdgeMargin) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    pub fn clamped(mut self) -> Self {
        self.threshold = if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn is_crossed_by(&self, entry: &VisibilityEntry) -> bool {
        entry.is_intersecting && entry.ratio + RATIO_TOLERANCE >= self.threshold
    }
}

// ===== NOTIFICATIONS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch#{}", self.0)
    }
}

/// One visibility change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub id: SubscriptionId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn visible(id: SubscriptionId, ratio: f64) -> Self {
        Self {
            id,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    pub fn hidden(id: SubscriptionId) -> Self {
        Self {
            id,
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

/// Host facility that watches targets and later reports `VisibilityEntry`
/// batches for them (out of band, usually over a channel).
pub trait VisibilitySource {
    type Target;

    fn observe(&self, id: SubscriptionId, target: &Self::Target, options: &VisibilityOptions);

    /// Must tolerate ids that are no longer observed.
    fn unobserve(&self, id: SubscriptionId);
}

// ===== GATE =====

struct Watched {
    options: VisibilityOptions,
    on_visible: Box<dyn FnOnce()>,
}

pub struct VisibilityGate<S: VisibilitySource> {
    source: S,
    next_id: u64,
    watched: BTreeMap<SubscriptionId, Watched>,
}

impl<S: VisibilitySource> VisibilityGate<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            next_id: 0,
            watched: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Watch `target` and call `on_visible` the first time it crosses the
    /// threshold.
    pub fn register(
        &mut self,
        target: &S::Target,
        options: VisibilityOptions,
        on_visible: impl FnOnce() + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let options = options.clamped();
        self.watched.insert(
            id,
            Watched {
                options,
                on_visible: Box::new(on_visible),
            },
        );
        self.source.observe(id, target, &options);
        id
    }

    /// Stop watching without firing. Returns `false` if `id` was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.watched.remove(&id) {
            Some(_) => {
                self.source.unobserve(id);
                true
            }
            None => false,
        }
    }

    pub fn is_watching(&self, id: SubscriptionId) -> bool {
        self.watched.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Apply one batch of host notifications and return how many targets
    /// fired. Entries for unknown or already fired targets are skipped.
    pub fn notify(&mut self, batch: &[VisibilityEntry]) -> usize {
        let mut fired = 0;
        for entry in batch {
            let crossed = self
                .watched
                .get(&entry.id)
                .is_some_and(|watched| watched.options.is_crossed_by(entry));
            if !crossed {
                continue;
            }
            if let Some(watched) = self.watched.remove(&entry.id) {
                self.source.unobserve(entry.id);
                (watched.on_visible)();
                fired += 1;
            }
        }
        fired
    }

    /// Drain notification batches until every target has fired or the
    /// stream ends.
    pub async fn run<N>(mut self, mut notifications: N)
    where
        N: Stream<Item = Vec<VisibilityEntry>> + Unpin,
    {
        while !self.is_empty() {
            match notifications.next().await {
                Some(batch) => {
                    self.notify(&batch);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingVisibility;
    use futures::channel::mpsc;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn counting_gate() -> VisibilityGate<RecordingVisibility> {
        VisibilityGate::new(RecordingVisibility::default())
    }

    #[test]
    fn test_root_margin_shorthand() {
        assert_eq!(EdgeMargin::bottom(-100).to_root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityOptions::new(1.5).threshold, 1.0);
        assert_eq!(VisibilityOptions::new(-0.2).threshold, 0.0);
        assert_eq!(VisibilityOptions::new(f64::NAN).threshold, 0.0);
    }

    #[test]
    fn test_register_observes_with_options() {
        let mut gate = counting_gate();
        let options = VisibilityOptions::new(0.1).with_edge_margin(EdgeMargin::bottom(-100));
        let id = gate.register(&"about", options, || {});

        let observed = gate.source().observed.borrow();
        assert_eq!(observed.as_slice(), &[(id, "about", options)]);
        assert!(gate.is_watching(id));
    }

    #[test]
    fn test_fires_once_then_unobserves() {
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(0));
        let id = gate.register(&"metrics", VisibilityOptions::new(0.5), {
            let fired = Rc::clone(&fired);
            move || fired.set(fired.get() + 1)
        });

        assert_eq!(gate.notify(&[VisibilityEntry::visible(id, 0.6)]), 1);
        assert_eq!(gate.notify(&[VisibilityEntry::visible(id, 0.9)]), 0);

        assert_eq!(fired.get(), 1);
        assert!(gate.is_empty());
        assert_eq!(gate.source().unobserved.borrow().as_slice(), &[id]);
    }

    #[test]
    fn test_duplicate_entries_in_one_batch_fire_once() {
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(0));
        let id = gate.register(&"hero", VisibilityOptions::new(0.1), {
            let fired = Rc::clone(&fired);
            move || fired.set(fired.get() + 1)
        });

        let entry = VisibilityEntry::visible(id, 0.3);
        gate.notify(&[entry, entry, entry]);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(false));
        let id = gate.register(&"metrics", VisibilityOptions::new(0.5), {
            let fired = Rc::clone(&fired);
            move || fired.set(true)
        });

        gate.notify(&[VisibilityEntry::visible(id, 0.2), VisibilityEntry::hidden(id)]);
        assert!(!fired.get());
        assert!(gate.is_watching(id));

        gate.notify(&[VisibilityEntry::visible(id, 0.5)]);
        assert!(fired.get());
    }

    #[test]
    fn test_crossing_ratio_tolerance() {
        let options = VisibilityOptions::new(0.5);
        let id = SubscriptionId(0);

        assert!(options.is_crossed_by(&VisibilityEntry::visible(id, 0.4995)));
        assert!(options.is_crossed_by(&VisibilityEntry::visible(id, 0.4991)));
        assert!(!options.is_crossed_by(&VisibilityEntry::visible(id, 0.498)));
    }

    #[test]
    fn test_zero_threshold_needs_intersection() {
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(false));
        let id = gate.register(&"footer", VisibilityOptions::new(0.0), {
            let fired = Rc::clone(&fired);
            move || fired.set(true)
        });

        gate.notify(&[VisibilityEntry::hidden(id)]);
        assert!(!fired.get());
    }

    #[test]
    fn test_removal_mid_batch_leaves_others_alone() {
        let mut gate = counting_gate();
        let order = Rc::new(RefCell::new(Vec::new()));
        let ids: Vec<SubscriptionId> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                let order = Rc::clone(&order);
                gate.register(&name, VisibilityOptions::new(0.1), move || {
                    order.borrow_mut().push(name)
                })
            })
            .collect();

        gate.notify(&[
            VisibilityEntry::visible(ids[2], 1.0),
            VisibilityEntry::visible(ids[0], 1.0),
            VisibilityEntry::visible(ids[2], 1.0),
        ]);

        assert_eq!(order.borrow().as_slice(), &["c", "a"]);
        assert!(gate.is_watching(ids[1]));
        assert_eq!(gate.len(), 1);
    }

    #[test]
    fn test_unsubscribe_is_idempotent_and_silent() {
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(false));
        let id = gate.register(&"skills", VisibilityOptions::new(0.1), {
            let fired = Rc::clone(&fired);
            move || fired.set(true)
        });

        assert!(gate.unsubscribe(id));
        assert!(!gate.unsubscribe(id));
        gate.notify(&[VisibilityEntry::visible(id, 1.0)]);

        assert!(!fired.get());
        assert_eq!(gate.source().unobserved.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut gate = counting_gate();
        assert_eq!(gate.notify(&[VisibilityEntry::visible(SubscriptionId(42), 1.0)]), 0);
    }

    #[tokio::test]
    async fn test_run_stops_once_everything_fired() {
        let (batch_sender, batches) = mpsc::unbounded();
        let mut gate = counting_gate();
        let fired = Rc::new(Cell::new(0));
        let ids: Vec<SubscriptionId> = (0..2)
            .map(|_| {
                let fired = Rc::clone(&fired);
                gate.register(&"section", VisibilityOptions::new(0.1), move || {
                    fired.set(fired.get() + 1)
                })
            })
            .collect();

        batch_sender
            .unbounded_send(vec![VisibilityEntry::visible(ids[0], 0.5)])
            .unwrap();
        batch_sender
            .unbounded_send(vec![VisibilityEntry::visible(ids[1], 0.5)])
            .unwrap();

        // Sender stays open: returning proves the gate stopped on its own.
        gate.run(batches).await;
        assert_eq!(fired.get(), 2);
        drop(batch_sender);
    }

    #[tokio::test]
    async fn test_run_ends_with_stream() {
        let (batch_sender, batches) = mpsc::unbounded::<Vec<VisibilityEntry>>();
        let mut gate = counting_gate();
        gate.register(&"contact", VisibilityOptions::new(0.1), || {});
        drop(batch_sender);

        gate.run(batches).await;
    }
}
