//! Scroll-triggered fade-ins, metric counters and the hero typing effect.

use crate::dom::{self, ElementText, QueryRoot};
use crate::platform::{BrowserScheduler, IntersectionSource};
use shared::config::{MetricsSection, RevealSection, TypewriterSection};
use shared::typewriter;
use shared::{
    CounterAnimator, CounterSpec, RenderSink, StaggerPlan, VisibilityGate, register_counter_group,
    register_reveals,
};
use std::rc::Rc;
use web_sys::{Document, Element};

pub type PageGate = VisibilityGate<IntersectionSource>;

/// Fade every section in the first time it scrolls into view.
pub fn observe_sections(gate: &mut PageGate, document: &Document, config: &RevealSection) -> usize {
    let sections = document.select_all(&config.section_selector);
    let revealed_sections: Rc<[Element]> = sections.clone().into();
    let class_name = config.class_name.clone();
    let ids = register_reveals(gate, &sections, config.visibility, move |index| {
        dom::add_class(&revealed_sections[index], &class_name);
    });
    ids.len()
}

/// Count the metric values up, staggered, once the metrics strip is visible.
pub fn observe_metrics(
    gate: &mut PageGate,
    animator: &CounterAnimator<BrowserScheduler>,
    document: &Document,
    config: &MetricsSection,
) -> usize {
    let Some(region) = document.select(&config.region_selector) else {
        zoon::println!("[Portfolio] No metrics region, counters disabled");
        return 0;
    };

    let counters: Vec<CounterSpec> = region
        .select_all(&config.value_selector)
        .into_iter()
        .zip(&config.values)
        .map(|(element, &target)| {
            let sink: Rc<dyn RenderSink> = Rc::new(ElementText::new(element));
            CounterSpec::new(target, config.duration_ms, sink).with_format(config.format)
        })
        .collect();
    let count = counters.len();

    register_counter_group(
        gate,
        &region,
        config.visibility,
        animator,
        counters,
        StaggerPlan::new(config.stagger_ms),
    )
    .map_or(0, |_| count)
}

/// Retype the hero subtitle character by character.
pub fn start_typewriter(
    scheduler: &Rc<BrowserScheduler>,
    document: &Document,
    config: &TypewriterSection,
) {
    let Some(subtitle) = document.select(&config.selector) else {
        return;
    };
    let text = subtitle.text_content().unwrap_or_default();
    typewriter::type_into(
        scheduler,
        Rc::new(ElementText::new(subtitle)),
        &text,
        config.speed_ms,
    );
}
