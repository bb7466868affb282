//! View-state records for the page chrome.
//!
//! Each function here is pure: it turns page measurements or user events into
//! a small record that the frontend applies to the DOM in a separate step.

// ===== NAVBAR =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub shadow: &'static str,
}

impl NavbarStyle {
    pub const RESTING: NavbarStyle = NavbarStyle {
        background: "rgba(10, 25, 47, 0.95)",
        shadow: "0 2px 10px rgba(0, 0, 0, 0.3)",
    };

    pub const SCROLLED: NavbarStyle = NavbarStyle {
        background: "rgba(10, 25, 47, 0.98)",
        shadow: "0 2px 20px rgba(0, 0, 0, 0.5)",
    };

    /// Solid navbar once the page is scrolled strictly past `scrolled_after_px`.
    pub fn for_scroll(scroll_y: f64, scrolled_after_px: f64) -> Self {
        if scroll_y > scrolled_after_px {
            Self::SCROLLED
        } else {
            Self::RESTING
        }
    }
}

// ===== ACTIVE NAV LINK =====

pub const ACTIVE_LINK_COLOR: &str = "var(--accent)";

/// Top edge of a navigable section, measured from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// The section currently being read: the last one (in document order) whose
/// top is within `offset_px` below the scroll position. Empty when none.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset_px: f64) -> &str {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset_px)
        .map(|section| section.id.as_str())
        .unwrap_or("")
}

/// Link color for `href` given the active section id. `None` clears the
/// inline color so the stylesheet applies.
pub fn nav_link_color(href: &str, active_section: &str) -> Option<&'static str> {
    let is_active = href
        .strip_prefix('#')
        .is_some_and(|fragment| fragment == active_section);
    is_active.then_some(ACTIVE_LINK_COLOR)
}

/// Selector for an in-page anchor, if `href` names one.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

// ===== HOVER =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    ProjectCard,
    SkillTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub property: &'static str,
    pub value: &'static str,
}

impl HoverTarget {
    pub fn style(self, hovered: bool) -> HoverStyle {
        match (self, hovered) {
            (HoverTarget::ProjectCard, true) => HoverStyle {
                property: "border-color",
                value: "rgba(100, 255, 218, 0.5)",
            },
            (HoverTarget::ProjectCard, false) => HoverStyle {
                property: "border-color",
                value: "rgba(100, 255, 218, 0.1)",
            },
            (HoverTarget::SkillTag, true) => HoverStyle {
                property: "box-shadow",
                value: "0 5px 15px rgba(100, 255, 218, 0.3)",
            },
            (HoverTarget::SkillTag, false) => HoverStyle {
                property: "box-shadow",
                value: "none",
            },
        }
    }
}

// ===== CONTACT FORM =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub disabled: bool,
}

/// Loading feedback for the contact form's submit button. The form itself
/// still submits natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFeedback {
    original_label: String,
    sending_label: String,
}

impl SubmitFeedback {
    pub fn new(original_label: impl Into<String>, sending_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            sending_label: sending_label.into(),
        }
    }

    pub fn sending(&self) -> SubmitButtonState {
        SubmitButtonState {
            label: self.sending_label.clone(),
            disabled: true,
        }
    }

    pub fn restored(&self) -> SubmitButtonState {
        SubmitButtonState {
            label: self.original_label.clone(),
            disabled: false,
        }
    }
}
