use academy_core::model::{CompletionRule, Lesson, SectionId};

/// Navigation and header helpers over one catalog lesson.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonVm {
    lesson: Lesson,
}

impl LessonVm {
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self { lesson }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn first_section(&self) -> SectionId {
        self.lesson.sections()[0].id().clone()
    }

    #[must_use]
    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.lesson.sections().iter().position(|s| s.id() == id)
    }

    /// The section after `id`, if `id` is not the capstone.
    #[must_use]
    pub fn next_after(&self, id: &SectionId) -> Option<SectionId> {
        let index = self.index_of(id)?;
        self.lesson
            .sections()
            .get(index + 1)
            .map(|s| s.id().clone())
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!(
            "Week {} Lesson {}: {}",
            self.lesson.key().week(),
            self.lesson.key().lesson(),
            self.lesson.title()
        )
    }

    #[must_use]
    pub fn back_label(&self) -> String {
        format!("← Back to Week {}", self.lesson.key().week())
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.lesson.duration_minutes())
    }

    #[must_use]
    pub fn sections_label(&self) -> String {
        format!("{} sections", self.lesson.sections().len())
    }

    #[must_use]
    pub fn capstone_label(&self) -> &'static str {
        if self.lesson.quiz().is_some() {
            "Includes quiz"
        } else {
            "Includes activities"
        }
    }

    /// The quiz pass bar, for quiz-gated lessons only.
    #[must_use]
    pub fn pass_percent(&self) -> Option<u8> {
        match self.lesson.completion() {
            CompletionRule::QuizPass { pass_percent } => Some(pass_percent),
            CompletionRule::SectionsVisited => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::Catalog;
    use academy_core::model::LessonKey;

    fn vm(week: u8, lesson: u8) -> LessonVm {
        let catalog = Catalog::standard();
        let lesson = catalog
            .lesson(LessonKey::new(week, lesson).unwrap())
            .unwrap()
            .clone();
        LessonVm::new(lesson)
    }

    fn sid(id: &str) -> SectionId {
        SectionId::new(id).unwrap()
    }

    #[test]
    fn walks_sections_in_order() {
        let vm = vm(1, 1);
        assert_eq!(vm.first_section(), sid("introduction"));
        assert_eq!(
            vm.next_after(&sid("introduction")),
            Some(sid("characteristics"))
        );
        // the capstone has no successor
        assert_eq!(vm.next_after(&sid("quiz")), None);
        assert_eq!(vm.next_after(&sid("missing")), None);
    }

    #[test]
    fn header_labels() {
        let vm = vm(1, 1);
        assert_eq!(vm.heading(), "Week 1 Lesson 1: What is Entrepreneurship?");
        assert_eq!(vm.back_label(), "← Back to Week 1");
        assert_eq!(vm.duration_label(), "45 minutes");
        assert_eq!(vm.sections_label(), "10 sections");
        assert_eq!(vm.capstone_label(), "Includes quiz");
    }

    #[test]
    fn pass_bar_only_for_quiz_gated_lessons() {
        assert_eq!(vm(1, 1).pass_percent(), None);
        assert_eq!(vm(3, 1).pass_percent(), Some(80));
    }
}
