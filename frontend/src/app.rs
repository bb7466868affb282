//! Page bootstrap.
//!
//! Collects the page's DOM regions once, hands them to the features that use
//! them, then keeps the visibility gate running until every watched region
//! has fired.

use crate::animations::{self, PageGate};
use crate::platform::{BrowserScheduler, IntersectionSource};
use crate::{banner, config, dom, interactions, navigation};
use shared::{CounterAnimator, PortfolioConfig, VisibilityGate};
use std::rc::Rc;
use web_sys::{Document, Window};

pub struct PortfolioApp {
    window: Window,
    document: Document,
    config: PortfolioConfig,
    scheduler: Rc<BrowserScheduler>,
}

impl PortfolioApp {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let config = config::load_page_config(&document);
        Some(Self {
            window,
            document,
            config,
            scheduler: Rc::new(BrowserScheduler::new()),
        })
    }

    pub async fn run(self) {
        let anchors = navigation::wire_smooth_scroll(&self.document, &self.config.navigation);
        navigation::track_scroll(&self.window, &self.document, &self.config.navigation);
        interactions::wire_hover(&self.document, &self.config.hover);
        interactions::wire_contact_form(&self.document, &self.config.contact);

        let (source, visibility_entries) = IntersectionSource::with_receiver();
        let mut gate: PageGate = VisibilityGate::new(source);
        let animator = CounterAnimator::new(Rc::clone(&self.scheduler));
        let sections = animations::observe_sections(&mut gate, &self.document, &self.config.reveal);
        let counters =
            animations::observe_metrics(&mut gate, &animator, &self.document, &self.config.metrics);

        banner::print_banner(&self.config.banner);
        self.on_page_loaded();

        zoon::println!(
            "[Portfolio] Ready: {} anchors, {} sections, {} counters",
            anchors,
            sections,
            counters
        );
        gate.run(visibility_entries).await;
    }

    fn on_page_loaded(&self) {
        let after_load = {
            let window = self.window.clone();
            let document = self.document.clone();
            let scheduler = Rc::clone(&self.scheduler);
            let log_load_time = self.config.banner.log_load_time;
            let typewriter_config = self.config.typewriter.clone();
            move || {
                if log_load_time {
                    banner::log_load_time(&window);
                }
                if typewriter_config.enabled {
                    animations::start_typewriter(&scheduler, &document, &typewriter_config);
                }
            }
        };

        // The module may start after `load` already fired.
        if self.document.ready_state() == "complete" {
            after_load();
            return;
        }
        let mut after_load = Some(after_load);
        dom::listen(&self.window, "load", move |_| {
            if let Some(after_load) = after_load.take() {
                after_load();
            }
        });
    }
}
