//! Page configuration.
//!
//! Every field has a default, so an empty document (or none at all) yields the
//! stock portfolio behavior. Pages may override parts of it with an inline
//! TOML block.

use crate::metric_format::MetricFormat;
use crate::visibility::{EdgeMargin, VisibilityOptions};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    pub reveal: RevealSection,
    pub metrics: MetricsSection,
    pub navigation: NavigationSection,
    pub hover: HoverSection,
    pub contact: ContactSection,
    pub typewriter: TypewriterSection,
    pub banner: BannerSection,
}

impl PortfolioConfig {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str::<Self>(content)
            .map(Self::validated)
            .map_err(|error| format!("Failed to parse portfolio config: {error}"))
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|error| format!("Failed to serialize portfolio config: {error}"))
    }

    /// Clamp values a page could get wrong into their usable range.
    pub fn validated(mut self) -> Self {
        self.reveal.visibility = self.reveal.visibility.clamped();
        self.metrics.visibility = self.metrics.visibility.clamped();
        self.metrics.values.retain(|value| value.is_finite());
        for value in &mut self.metrics.values {
            *value = value.max(0.0);
        }
        self
    }
}

/// Fade-in of whole page sections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RevealSection {
    pub section_selector: String,
    pub class_name: String,
    #[serde(deserialize_with = "reveal_visibility")]
    pub visibility: VisibilityOptions,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            section_selector: "section".to_string(),
            class_name: "fade-in".to_string(),
            visibility: VisibilityOptions::new(0.1).with_edge_margin(EdgeMargin::bottom(-100)),
        }
    }
}

/// Animated counters inside the metrics strip. `values[i]` drives the i-th
/// element matching `value_selector`; extra elements are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetricsSection {
    pub region_selector: String,
    pub value_selector: String,
    pub values: Vec<f64>,
    pub duration_ms: u32,
    pub stagger_ms: u32,
    pub format: MetricFormat,
    #[serde(deserialize_with = "metrics_visibility")]
    pub visibility: VisibilityOptions,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            region_selector: ".metrics".to_string(),
            value_selector: ".metric-value".to_string(),
            // Years, dollars, percent, 24/7
            values: vec![2.0, 100_000.0, 18.0, 24.0],
            duration_ms: 1_500,
            stagger_ms: 200,
            format: MetricFormat::Showcase,
            visibility: VisibilityOptions::new(0.5),
        }
    }
}

/// A `visibility` table as written by a page. Missing keys keep the owning
/// section's stock value instead of the `VisibilityOptions` default.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct VisibilityOverride {
    threshold: Option<f64>,
    edge_margin: EdgeMarginOverride,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct EdgeMarginOverride {
    top: Option<i32>,
    right: Option<i32>,
    bottom: Option<i32>,
    left: Option<i32>,
}

impl VisibilityOverride {
    fn apply_to(self, base: VisibilityOptions) -> VisibilityOptions {
        let margin = self.edge_margin;
        VisibilityOptions {
            threshold: self.threshold.unwrap_or(base.threshold),
            edge_margin: EdgeMargin {
                top: margin.top.unwrap_or(base.edge_margin.top),
                right: margin.right.unwrap_or(base.edge_margin.right),
                bottom: margin.bottom.unwrap_or(base.edge_margin.bottom),
                left: margin.left.unwrap_or(base.edge_margin.left),
            },
        }
    }
}

fn reveal_visibility<'de, D>(deserializer: D) -> Result<VisibilityOptions, D::Error>
where
    D: Deserializer<'de>,
{
    VisibilityOverride::deserialize(deserializer)
        .map(|partial| partial.apply_to(RevealSection::default().visibility))
}

fn metrics_visibility<'de, D>(deserializer: D) -> Result<VisibilityOptions, D::Error>
where
    D: Deserializer<'de>,
{
    VisibilityOverride::deserialize(deserializer)
        .map(|partial| partial.apply_to(MetricsSection::default().visibility))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationSection {
    pub anchor_selector: String,
    pub nav_selector: String,
    pub nav_link_selector: String,
    pub section_selector: String,
    pub scrolled_after_px: f64,
    pub active_offset_px: f64,
}

impl Default for NavigationSection {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".to_string(),
            nav_selector: "nav".to_string(),
            nav_link_selector: "nav a[href^=\"#\"]".to_string(),
            section_selector: "section[id]".to_string(),
            scrolled_after_px: 100.0,
            active_offset_px: 200.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HoverSection {
    pub project_card_selector: String,
    pub skill_tag_selector: String,
}

impl Default for HoverSection {
    fn default() -> Self {
        Self {
            project_card_selector: ".project-card".to_string(),
            skill_tag_selector: ".skill-tag".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContactSection {
    pub form_selector: String,
    pub submit_selector: String,
    pub sending_label: String,
    pub restore_after_ms: u32,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            form_selector: ".contact-form form".to_string(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            sending_label: "Sending...".to_string(),
            restore_after_ms: 2_000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TypewriterSection {
    pub enabled: bool,
    pub selector: String,
    pub speed_ms: u32,
}

impl Default for TypewriterSection {
    fn default() -> Self {
        Self {
            enabled: false,
            selector: ".hero h2".to_string(),
            speed_ms: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BannerSection {
    pub enabled: bool,
    pub greeting: String,
    pub thanks: String,
    pub invite: String,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub log_load_time: bool,
}

impl Default for BannerSection {
    fn default() -> Self {
        Self {
            enabled: true,
            greeting: "👋 Hello, Recruiter!".to_string(),
            thanks: "Thanks for checking out my portfolio!".to_string(),
            invite: "If you're interested in my work, let's connect:".to_string(),
            // Contact lines, and the invite above them, are opt-in: a page
            // sets `email` / `linkedin` in its config to print them.
            email: None,
            linkedin: None,
            log_load_time: true,
        }
    }
}
