//! Hover highlights and contact form feedback.

use crate::dom::{self, QueryRoot};
use gloo_timers::callback::Timeout;
use shared::config::{ContactSection, HoverSection};
use shared::view_state::{HoverTarget, SubmitButtonState, SubmitFeedback};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

pub fn wire_hover(document: &Document, config: &HoverSection) {
    let groups = [
        (&config.project_card_selector, HoverTarget::ProjectCard),
        (&config.skill_tag_selector, HoverTarget::SkillTag),
    ];
    for (selector, target) in groups {
        for element in document.select_all(selector) {
            for (event_name, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let hovered_element = element.clone();
                dom::listen(&element, event_name, move |_| {
                    let style = target.style(hovered);
                    dom::set_style(&hovered_element, style.property, Some(style.value));
                });
            }
        }
    }
}

/// Show a sending state on submit and restore the button afterwards. The
/// submission itself is left to the browser.
pub fn wire_contact_form(document: &Document, config: &ContactSection) {
    let Some(form) = document.select(&config.form_selector) else {
        return;
    };
    let config = config.clone();
    let submitted_form = form.clone();
    dom::listen(&form, "submit", move |_| {
        let Some(button) = submitted_form
            .select(&config.submit_selector)
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
        else {
            zoon::eprintln!("[Portfolio] Contact form has no submit button");
            return;
        };
        let feedback = SubmitFeedback::new(
            button.text_content().unwrap_or_default(),
            config.sending_label.clone(),
        );
        apply_button_state(&button, &feedback.sending());

        Timeout::new(config.restore_after_ms, move || {
            apply_button_state(&button, &feedback.restored());
        })
        .forget();
    });
}

fn apply_button_state(button: &HtmlButtonElement, state: &SubmitButtonState) {
    button.set_text_content(Some(&state.label));
    button.set_disabled(state.disabled);
}
