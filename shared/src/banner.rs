//! Console greeting printed for curious visitors, and the load-time line.

use crate::config::BannerSection;

/// One `%c`-styled console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub css: &'static str,
}

impl BannerLine {
    fn new(text: impl Into<String>, css: &'static str) -> Self {
        Self {
            text: text.into(),
            css,
        }
    }
}

const ACCENT_HEADLINE: &str = "color: #64FFDA; font-size: 24px; font-weight: bold;";
const MUTED: &str = "color: #8892B0; font-size: 14px;";
const BODY: &str = "color: #E6F1FF; font-size: 12px;";
const ACCENT: &str = "color: #64FFDA; font-size: 12px;";
const GRADIENT_BAR: &str = "background: linear-gradient(90deg, #64FFDA, #00D9FF); padding: 10px;";

pub fn banner_lines(banner: &BannerSection) -> Vec<BannerLine> {
    let mut lines = vec![
        BannerLine::new(banner.greeting.clone(), ACCENT_HEADLINE),
        BannerLine::new(banner.thanks.clone(), MUTED),
    ];

    let contacts: Vec<BannerLine> = [
        banner.email.as_ref().map(|email| format!("📧 {email}")),
        banner.linkedin.as_ref().map(|profile| format!("💼 {profile}")),
    ]
    .into_iter()
    .flatten()
    .map(|text| BannerLine::new(text, ACCENT))
    .collect();

    if !contacts.is_empty() {
        lines.push(BannerLine::new(banner.invite.clone(), BODY));
        lines.extend(contacts);
    }

    lines.push(BannerLine::new("", GRADIENT_BAR));
    lines
}

/// Milliseconds from navigation start to the end of `DOMContentLoaded`.
pub fn load_time_message(navigation_start_ms: f64, dom_content_loaded_end_ms: f64) -> String {
    let elapsed = (dom_content_loaded_end_ms - navigation_start_ms).max(0.0);
    format!("Page loaded in {}ms", elapsed.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_without_contacts() {
        let lines = banner_lines(&BannerSection::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "👋 Hello, Recruiter!");
        assert_eq!(lines[2].css, GRADIENT_BAR);
    }

    #[test]
    fn test_banner_with_contacts() {
        let banner = BannerSection {
            email: Some("someone@example.com".to_string()),
            linkedin: Some("linkedin.com/in/someone".to_string()),
            ..BannerSection::default()
        };
        let texts: Vec<String> = banner_lines(&banner).into_iter().map(|l| l.text).collect();
        assert_eq!(
            texts,
            vec![
                "👋 Hello, Recruiter!",
                "Thanks for checking out my portfolio!",
                "If you're interested in my work, let's connect:",
                "📧 someone@example.com",
                "💼 linkedin.com/in/someone",
                "",
            ]
        );
    }

    #[test]
    fn test_load_time_message() {
        assert_eq!(load_time_message(1_000.0, 1_342.4), "Page loaded in 342ms");
        assert_eq!(load_time_message(1_000.0, 0.0), "Page loaded in 0ms");
    }
}
