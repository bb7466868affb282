use serde::{Deserialize, Serialize};

/// Display rule applied to a metric value on every animation tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    /// The hero metrics table: money in thousands, a percentage, a years
    /// count and the "24/7" availability badge.
    #[default]
    Showcase,
    /// The bare number.
    Plain,
}

impl MetricFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            MetricFormat::Showcase => format_showcase(value),
            MetricFormat::Plain => format!("{}", value),
        }
    }

    pub fn as_static_str(&self) -> &'static str {
        match self {
            MetricFormat::Showcase => "showcase",
            MetricFormat::Plain => "plain",
        }
    }
}

// Order matters: first matching row wins. The `18` and `2` rows match exact
// values only, everything else below 1000 collapses into the "24/7" badge.
fn format_showcase(value: f64) -> String {
    if value >= 100_000.0 {
        format!("${}K+", whole_thousands(value))
    } else if value >= 1_000.0 {
        format!("{}K+", whole_thousands(value))
    } else if value == 18.0 {
        format!("{}%", value)
    } else if value == 2.0 {
        format!("{}+", value)
    } else {
        "24/7".to_string()
    }
}

/// Thousands rounded half away from zero, no decimals.
fn whole_thousands(value: f64) -> i64 {
    (value / 1_000.0).round() as i64
}
