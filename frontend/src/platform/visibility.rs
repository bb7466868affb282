use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use shared::{SubscriptionId, VisibilityEntry, VisibilityOptions, VisibilitySource};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct ObservedTarget {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// One `IntersectionObserver` per subscription, so every target keeps its own
/// threshold and root margin. Observer callbacks only forward entries into a
/// channel; the gate consumes them from a task.
pub struct IntersectionSource {
    entries_relay: UnboundedSender<Vec<VisibilityEntry>>,
    observed: RefCell<HashMap<SubscriptionId, ObservedTarget>>,
}

impl IntersectionSource {
    pub fn with_receiver() -> (Self, UnboundedReceiver<Vec<VisibilityEntry>>) {
        let (entries_relay, entries_stream) = mpsc::unbounded();
        let source = Self {
            entries_relay,
            observed: RefCell::new(HashMap::new()),
        };
        (source, entries_stream)
    }
}

impl VisibilitySource for IntersectionSource {
    type Target = Element;

    fn observe(&self, id: SubscriptionId, target: &Element, options: &VisibilityOptions) {
        let entries_relay = self.entries_relay.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<VisibilityEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEntry {
                        id,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                if !batch.is_empty() {
                    // Receiver gone means the gate already finished.
                    let _ = entries_relay.unbounded_send(batch);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.edge_margin.to_root_margin());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(target);
                self.observed.borrow_mut().insert(
                    id,
                    ObservedTarget {
                        observer,
                        _callback: callback,
                    },
                );
            }
            Err(error) => {
                zoon::eprintln!("[Portfolio] Cannot observe {}: {:?}", id, error);
            }
        }
    }

    fn unobserve(&self, id: SubscriptionId) {
        let observed = self.observed.borrow_mut().remove(&id);
        if let Some(observed) = observed {
            observed.observer.disconnect();
        }
    }
}
