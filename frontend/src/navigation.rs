//! Smooth in-page scrolling, navbar backdrop and active-link highlighting.

use crate::dom::{self, QueryRoot};
use shared::config::NavigationSection;
use shared::view_state::{self, NavbarStyle, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};
use zoon::{Mutable, SignalExt, Task};

/// Scroll smoothly to the anchor's target instead of jumping.
pub fn wire_smooth_scroll(document: &Document, config: &NavigationSection) -> usize {
    let anchors = document.select_all(&config.anchor_selector);
    for anchor in &anchors {
        let document = document.clone();
        let clicked_anchor = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            event.prevent_default();
            let href = clicked_anchor.get_attribute("href").unwrap_or_default();
            let Some(selector) = view_state::anchor_selector(&href) else {
                return;
            };
            if let Some(target) = document.select(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
    anchors.len()
}

/// Page chrome driven by the scroll position.
///
/// Scroll events only update the two view-state mutables; the tasks below
/// apply them to the navbar and links when they actually change.
pub fn track_scroll(window: &Window, document: &Document, config: &NavigationSection) {
    let sections: Vec<HtmlElement> = document
        .select_all(&config.section_selector)
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .collect();
    let links = document.select_all(&config.nav_link_selector);

    let scrolled_after_px = config.scrolled_after_px;
    let active_offset_px = config.active_offset_px;
    let measure = move |window: &Window| {
        let scroll_y = window.scroll_y().unwrap_or_default();
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
            })
            .collect();
        (
            NavbarStyle::for_scroll(scroll_y, scrolled_after_px),
            view_state::active_section(&bounds, scroll_y, active_offset_px).to_string(),
        )
    };

    let (initial_style, initial_section) = measure(window);
    let navbar_style = Mutable::new(initial_style);
    let active_section = Mutable::new(initial_section);

    match document.select(&config.nav_selector) {
        Some(nav) => {
            Task::start(navbar_style.signal().for_each(move |style| {
                dom::set_style(&nav, "background-color", Some(style.background));
                dom::set_style(&nav, "box-shadow", Some(style.shadow));
                async {}
            }));
        }
        None => zoon::println!("[Portfolio] No navbar on this page"),
    }

    if !links.is_empty() {
        Task::start(active_section.signal_cloned().for_each(move |active| {
            for link in &links {
                let href = link.get_attribute("href").unwrap_or_default();
                dom::set_style(link, "color", view_state::nav_link_color(&href, &active));
            }
            async {}
        }));
    }

    let scrolled_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let (style, section) = measure(&scrolled_window);
        navbar_style.set_neq(style);
        active_section.set_neq(section);
    });
}
