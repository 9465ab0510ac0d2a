use pulldown_cmark::{Parser, html};
use services::ParsedFeedback;

/// The analyzer's feedback prepared for rendering: markdown sections as
/// sanitized HTML, list sections as items, plus the score dial value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackVm {
    pub score: Option<u8>,
    pub summary_html: String,
    pub improvements: Vec<String>,
    pub actions: Vec<String>,
    pub red_flags_html: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let parsed = ParsedFeedback::parse(raw);
        Self {
            score: parsed.score,
            summary_html: markdown_or_none(&parsed.summary),
            improvements: ParsedFeedback::items(&parsed.improvements),
            actions: ParsedFeedback::items(&parsed.actions),
            red_flags_html: markdown_or_none(&parsed.red_flags),
        }
    }

    /// Stroke offset for the score dial (circumference × missing share).
    #[must_use]
    pub fn dial_offset(&self, circumference: f64) -> f64 {
        let score = f64::from(self.score.unwrap_or(0));
        circumference * (1.0 - score / 100.0)
    }
}

/// Markdown → sanitized HTML; empty input renders as "None".
fn markdown_or_none(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return "<p>None</p>".to_owned();
    }
    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new(markdown));
    ammonia::clean(&rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
**Score:** 90/100

**Summary of Strengths:**
Strong *quantified* achievements.

**Areas for Improvement:**
* Add a skills section
* Tighten the summary

**Actionable Feedback:**
Lead with impact.
";

    #[test]
    fn renders_markdown_sections_to_sanitized_html() {
        let vm = FeedbackVm::from_raw(SAMPLE);
        assert_eq!(vm.score, Some(90));
        assert!(vm.summary_html.contains("<em>quantified</em>"));
        assert_eq!(vm.improvements.len(), 2);
        assert_eq!(vm.actions, vec!["Lead with impact.".to_owned()]);
        assert_eq!(vm.red_flags_html, "<p>None</p>");
    }

    #[test]
    fn scripts_are_stripped() {
        let vm = FeedbackVm::from_raw(
            "**Summary of Strengths:**\n<script>alert(1)</script>Solid resume.",
        );
        assert!(!vm.summary_html.contains("script"));
        assert!(vm.summary_html.contains("Solid resume."));
    }

    #[test]
    fn dial_offset_shrinks_with_score() {
        let full = FeedbackVm {
            score: Some(100),
            ..FeedbackVm::default()
        };
        assert!(full.dial_offset(283.0).abs() < f64::EPSILON);

        let half = FeedbackVm {
            score: Some(50),
            ..FeedbackVm::default()
        };
        assert!((half.dial_offset(283.0) - 141.5).abs() < 1e-9);
    }
}
