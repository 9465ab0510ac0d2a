use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::activity::SortingActivity;
use crate::model::ids::{LessonKey, SectionId};
use crate::model::quiz::Quiz;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("a lesson needs at least two sections")]
    TooFewSections,

    #[error("duplicate section id {0:?}")]
    DuplicateSection(SectionId),
}

/// A pull quote inside a reading section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
}

/// One slide in the founder-stories carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub name: String,
    pub problem: String,
    pub solution: String,
}

/// One input in a free-response section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseField {
    pub label: String,
    pub placeholder: String,
    pub multiline: bool,
}

/// One option in a pick-one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub label: String,
    pub feedback: String,
    pub correct: bool,
}

/// An expandable teaching card (pricing models, place strategies,
/// manifesto principles, brand showcases).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub label: String,
    pub body: String,
    pub example: String,
}

/// One step in the idea-validation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistStep {
    pub label: String,
    pub prompt: String,
}

/// The typed content of a lesson section. One lesson view renders any of
/// these; the catalog decides which appear where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionBody {
    Reading {
        paragraphs: Vec<String>,
        bullets: Vec<String>,
        quote: Option<Quote>,
    },
    TraitChecklist {
        prompt: String,
        traits: Vec<String>,
    },
    StoryCarousel {
        stories: Vec<Story>,
    },
    FreeResponse {
        intro: String,
        fields: Vec<ResponseField>,
        feedback: String,
    },
    Sorting(SortingActivity),
    MindsetSlider {
        prompt: String,
        low_label: String,
        high_label: String,
    },
    Scenario {
        prompt: String,
        choices: Vec<ScenarioChoice>,
    },
    InfoCards {
        intro: String,
        cards: Vec<InfoCard>,
        followup: Option<ResponseField>,
    },
    ValidationChecklist {
        intro: String,
        steps: Vec<ChecklistStep>,
    },
    ArchetypeWheel {
        prompt: String,
        archetypes: Vec<String>,
    },
    MindMap {
        intro: String,
        instructions: Vec<String>,
    },
    GanttBuilder,
    RiskMatrix,
    RiskRegister,
    Quiz(Quiz),
}

/// A named sub-step of a lesson, toggled from the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    label: String,
    body: SectionBody,
}

impl Section {
    #[must_use]
    pub fn new(id: SectionId, label: impl Into<String>, body: SectionBody) -> Self {
        Self {
            id,
            label: label.into(),
            body,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn body(&self) -> &SectionBody {
        &self.body
    }
}

/// How a lesson reaches `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionRule {
    /// Visiting every tracked section completes the lesson with score 100.
    SectionsVisited,
    /// A submitted quiz at or above the bar completes it with the quiz score.
    QuizPass { pass_percent: u8 },
}

/// One lesson: metadata plus an ordered section list. The final section is
/// the capstone (quiz or takeaway) and is excluded from progress tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    key: LessonKey,
    title: String,
    description: String,
    duration_minutes: u16,
    sections: Vec<Section>,
    completion: CompletionRule,
}

impl Lesson {
    /// Creates a lesson.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for a blank title, fewer than two sections, or
    /// duplicate section ids.
    pub fn new(
        key: LessonKey,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u16,
        sections: Vec<Section>,
        completion: CompletionRule,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if sections.len() < 2 {
            return Err(CourseError::TooFewSections);
        }
        for (index, section) in sections.iter().enumerate() {
            if sections[..index].iter().any(|s| s.id() == section.id()) {
                return Err(CourseError::DuplicateSection(section.id().clone()));
            }
        }
        Ok(Self {
            key,
            title: title.trim().to_owned(),
            description: description.into(),
            duration_minutes,
            sections,
            completion,
        })
    }

    #[must_use]
    pub fn key(&self) -> LessonKey {
        self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u16 {
        self.duration_minutes
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn completion(&self) -> CompletionRule {
        self.completion
    }

    /// All sections except the capstone.
    #[must_use]
    pub fn tracked_sections(&self) -> &[Section] {
        &self.sections[..self.sections.len() - 1]
    }

    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.sections.len() - 1
    }

    #[must_use]
    pub fn is_tracked(&self, id: &SectionId) -> bool {
        self.tracked_sections().iter().any(|s| s.id() == id)
    }

    /// The quiz carried by this lesson, if any section holds one.
    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.sections.iter().find_map(|s| match s.body() {
            SectionBody::Quiz(quiz) => Some(quiz),
            _ => None,
        })
    }
}

/// A themed week of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    number: u8,
    title: String,
    lessons: Vec<Lesson>,
}

impl Week {
    #[must_use]
    pub fn new(number: u8, title: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            number,
            title: title.into(),
            lessons,
        }
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> Section {
        Section::new(
            SectionId::new(id).unwrap(),
            id.to_uppercase(),
            SectionBody::Reading {
                paragraphs: Vec::new(),
                bullets: Vec::new(),
                quote: None,
            },
        )
    }

    fn key() -> LessonKey {
        LessonKey::new(1, 1).unwrap()
    }

    #[test]
    fn capstone_section_is_untracked() {
        let lesson = Lesson::new(
            key(),
            "Lesson",
            "",
            45,
            vec![section("intro"), section("activity"), section("quiz")],
            CompletionRule::SectionsVisited,
        )
        .unwrap();

        assert_eq!(lesson.tracked_count(), 2);
        assert!(lesson.is_tracked(&SectionId::new("intro").unwrap()));
        assert!(!lesson.is_tracked(&SectionId::new("quiz").unwrap()));
    }

    #[test]
    fn rejects_duplicate_sections() {
        let err = Lesson::new(
            key(),
            "Lesson",
            "",
            45,
            vec![section("intro"), section("intro")],
            CompletionRule::SectionsVisited,
        )
        .unwrap_err();
        assert_eq!(err, CourseError::DuplicateSection(SectionId::new("intro").unwrap()));
    }

    #[test]
    fn rejects_single_section_lessons() {
        let err = Lesson::new(
            key(),
            "Lesson",
            "",
            45,
            vec![section("intro")],
            CompletionRule::SectionsVisited,
        )
        .unwrap_err();
        assert_eq!(err, CourseError::TooFewSections);
    }
}
