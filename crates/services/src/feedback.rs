//! Parser for the analyzer's markdown feedback layout.
//!
//! The analyzer replies with loosely structured markdown: bold section
//! headings ("Summary of Strengths", "Areas for Improvement", ...) and a
//! `Score: N/100` line. Sections are extracted by heading; red flags hide
//! under several heading variants.

use regex::Regex;

/// The analyzer's feedback split into renderable sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub summary: String,
    pub improvements: String,
    pub actions: String,
    pub red_flags: String,
    pub score: Option<u8>,
}

impl ParsedFeedback {
    /// Parses the raw feedback markdown.
    #[must_use]
    pub fn parse(feedback: &str) -> Self {
        let summary = section(feedback, "Summary of Strengths").unwrap_or_default();
        let improvements = section(feedback, "Areas for Improvement").unwrap_or_default();
        let actions = section(feedback, "Actionable Feedback").unwrap_or_default();
        let red_flags = section(feedback, "Missing Sections / Red Flags")
            .or_else(|| section(feedback, "Missing Sections"))
            .or_else(|| section(feedback, "Red Flags"))
            .unwrap_or_default();

        Self {
            summary,
            improvements,
            actions,
            red_flags,
            score: score(feedback),
        }
    }

    /// Splits a section into display items on newlines and `*` bullets.
    #[must_use]
    pub fn items(section: &str) -> Vec<String> {
        section
            .split(['\n', '*'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

/// Everything between `**<label>...**` and the next bold heading.
fn section(feedback: &str, label: &str) -> Option<String> {
    let pattern = format!(r"(?i)\*\*{}[:/]?\s*\*\*", regex::escape(label));
    let re = Regex::new(&pattern).ok()?;
    let heading = re.find(feedback)?;

    let rest = &feedback[heading.end()..];
    let body = rest.find("**").map_or(rest, |next| &rest[..next]);
    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_owned())
    }
}

fn score(feedback: &str) -> Option<u8> {
    let re = Regex::new(r"(?i)\*\*Score.*?(\d{1,3})/100").ok()?;
    let raw = re.captures(feedback)?.get(1)?.as_str();
    let value: u16 = raw.parse().ok()?;
    u8::try_from(value.min(100)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
**Score:** 82/100

**Summary of Strengths:**
Strong quantified achievements and a clean chronology.

**Areas for Improvement:**
* Add a skills section
* Tighten the summary paragraph

**Actionable Feedback:**
Rewrite bullet points to lead with impact.

**Missing Sections / Red Flags:**
No education section found.
";

    #[test]
    fn parses_all_sections_and_score() {
        let parsed = ParsedFeedback::parse(SAMPLE);
        assert_eq!(parsed.score, Some(82));
        assert!(parsed.summary.starts_with("Strong quantified"));
        assert!(parsed.improvements.contains("skills section"));
        assert!(parsed.actions.starts_with("Rewrite bullet"));
        assert_eq!(parsed.red_flags, "No education section found.");
    }

    #[test]
    fn red_flags_heading_variants_are_accepted() {
        let alt = "**Red Flags:**\nEmployment gap in 2021.";
        let parsed = ParsedFeedback::parse(alt);
        assert_eq!(parsed.red_flags, "Employment gap in 2021.");

        let alt = "**Missing Sections:**\nNo contact details.";
        let parsed = ParsedFeedback::parse(alt);
        assert_eq!(parsed.red_flags, "No contact details.");
    }

    #[test]
    fn missing_sections_yield_empty_strings() {
        let parsed = ParsedFeedback::parse("plain prose with no headings");
        assert_eq!(parsed, ParsedFeedback::default());
    }

    #[test]
    fn items_split_on_bullets_and_newlines() {
        let items = ParsedFeedback::items("* Add a skills section\n* Tighten the summary");
        assert_eq!(
            items,
            vec![
                "Add a skills section".to_owned(),
                "Tighten the summary".to_owned()
            ]
        );
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        let parsed = ParsedFeedback::parse("**Score:** 250/100");
        assert_eq!(parsed.score, Some(100));
    }
}
