use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortingError {
    #[error("a sorting activity needs at least one bucket")]
    NoBuckets,

    #[error("item {item:?} references unknown bucket {bucket:?}")]
    UnknownBucket { item: String, bucket: String },

    #[error("duplicate item label {label:?}")]
    DuplicateItem { label: String },
}

/// A drop target in a sorting activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingBucket {
    id: String,
    label: String,
    description: Option<String>,
    example: Option<String>,
}

impl SortingBucket {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            example: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }
}

/// A draggable card. `bucket` is the correct target, or `None` when the
/// activity is reflective and accepts any placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingItem {
    label: String,
    bucket: Option<String>,
}

impl SortingItem {
    #[must_use]
    pub fn graded(label: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bucket: Some(bucket.into()),
        }
    }

    #[must_use]
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bucket: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// Result of checking a placement map against the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingOutcome {
    correct: usize,
    total: usize,
}

impl SortingOutcome {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// One generic classifier covering the risk/reward, market-structure, SWOT
/// and brand-match activities: buckets, items, and equality-count checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingActivity {
    prompt: String,
    buckets: Vec<SortingBucket>,
    items: Vec<SortingItem>,
    success_line: String,
    retry_hint: String,
}

impl SortingActivity {
    /// Creates an activity.
    ///
    /// # Errors
    ///
    /// Returns `SortingError` for empty buckets, duplicate item labels, or
    /// items pointing at unknown buckets.
    pub fn new(
        prompt: impl Into<String>,
        buckets: Vec<SortingBucket>,
        items: Vec<SortingItem>,
        success_line: impl Into<String>,
        retry_hint: impl Into<String>,
    ) -> Result<Self, SortingError> {
        if buckets.is_empty() {
            return Err(SortingError::NoBuckets);
        }
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|i| i.label == item.label) {
                return Err(SortingError::DuplicateItem {
                    label: item.label.clone(),
                });
            }
            if let Some(bucket) = item.bucket() {
                if !buckets.iter().any(|b| b.id() == bucket) {
                    return Err(SortingError::UnknownBucket {
                        item: item.label.clone(),
                        bucket: bucket.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            prompt: prompt.into(),
            buckets,
            items,
            success_line: success_line.into(),
            retry_hint: retry_hint.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn buckets(&self) -> &[SortingBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn items(&self) -> &[SortingItem] {
        &self.items
    }

    /// True when at least one item has a correct bucket to check against.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.items.iter().any(|item| item.bucket().is_some())
    }

    /// Counts correct placements. Unplaced graded items count as wrong.
    #[must_use]
    pub fn check(&self, placements: &HashMap<String, String>) -> SortingOutcome {
        let graded: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.bucket().is_some())
            .collect();
        let correct = graded
            .iter()
            .filter(|item| placements.get(item.label()).map(String::as_str) == item.bucket())
            .count();
        SortingOutcome {
            correct,
            total: graded.len(),
        }
    }

    /// The fully correct placement map, for "show answers".
    #[must_use]
    pub fn solution(&self) -> HashMap<String, String> {
        self.items
            .iter()
            .filter_map(|item| {
                item.bucket()
                    .map(|bucket| (item.label().to_owned(), bucket.to_owned()))
            })
            .collect()
    }

    /// Feedback line for a submission: the success line on a perfect (or
    /// ungraded) board, otherwise a count with the activity's retry hint.
    #[must_use]
    pub fn feedback(&self, outcome: SortingOutcome) -> String {
        if !self.is_graded() || outcome.is_perfect() {
            self.success_line.clone()
        } else {
            format!(
                "You got {} out of {} correct. {}",
                outcome.correct(),
                outcome.total(),
                self.retry_hint
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market_structures() -> SortingActivity {
        SortingActivity::new(
            "Drag each company to its market structure:",
            vec![
                SortingBucket::new("monopoly", "Monopoly"),
                SortingBucket::new("oligopoly", "Oligopoly"),
                SortingBucket::new("competitive", "Competitive"),
            ],
            vec![
                SortingItem::graded("Google (Search)", "monopoly"),
                SortingItem::graded("Airbus & Boeing", "oligopoly"),
                SortingItem::graded("Local Cafés", "competitive"),
            ],
            "Awesome! All matches are correct.",
            "Try again or show answers!",
        )
        .unwrap()
    }

    #[test]
    fn check_counts_exact_matches() {
        let activity = market_structures();
        let mut placements = HashMap::new();
        placements.insert("Google (Search)".to_string(), "monopoly".to_string());
        placements.insert("Airbus & Boeing".to_string(), "competitive".to_string());

        let outcome = activity.check(&placements);
        assert_eq!(outcome.correct(), 1);
        assert_eq!(outcome.total(), 3);
        assert_eq!(
            activity.feedback(outcome),
            "You got 1 out of 3 correct. Try again or show answers!"
        );
    }

    #[test]
    fn solution_is_perfect() {
        let activity = market_structures();
        let outcome = activity.check(&activity.solution());
        assert!(outcome.is_perfect());
        assert_eq!(activity.feedback(outcome), "Awesome! All matches are correct.");
    }

    #[test]
    fn ungraded_board_always_succeeds() {
        let activity = SortingActivity::new(
            "Sort into risk or reward:",
            vec![
                SortingBucket::new("risk", "Risk"),
                SortingBucket::new("reward", "Reward"),
            ],
            vec![
                SortingItem::open("Uncertain income"),
                SortingItem::open("Personal growth"),
            ],
            "Nice! Every founder faces both risks and rewards.",
            "",
        )
        .unwrap();
        assert!(!activity.is_graded());
        let outcome = activity.check(&HashMap::new());
        assert_eq!(
            activity.feedback(outcome),
            "Nice! Every founder faces both risks and rewards."
        );
    }

    #[test]
    fn rejects_unknown_bucket_reference() {
        let err = SortingActivity::new(
            "p",
            vec![SortingBucket::new("a", "A")],
            vec![SortingItem::graded("x", "b")],
            "ok",
            "retry",
        )
        .unwrap_err();
        assert_eq!(
            err,
            SortingError::UnknownBucket {
                item: "x".into(),
                bucket: "b".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_items() {
        let err = SortingActivity::new(
            "p",
            vec![SortingBucket::new("a", "A")],
            vec![SortingItem::graded("x", "a"), SortingItem::graded("x", "a")],
            "ok",
            "retry",
        )
        .unwrap_err();
        assert_eq!(err, SortingError::DuplicateItem { label: "x".into() });
    }
}
