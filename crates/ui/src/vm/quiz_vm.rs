use academy_core::model::{Quiz, QuizGrade, QuizQuestion};

/// Answer-sheet state for one quiz attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    quiz: Quiz,
    answers: Vec<Option<usize>>,
    grade: Option<QuizGrade>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.len()];
        Self {
            quiz,
            answers,
            grade: None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        self.quiz.questions()
    }

    #[must_use]
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Records a choice; locked once submitted.
    pub fn select(&mut self, question: usize, choice: usize) {
        if self.is_submitted() {
            return;
        }
        if let Some(slot) = self.answers.get_mut(question) {
            *slot = Some(choice);
        }
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.grade.is_some()
    }

    #[must_use]
    pub fn grade(&self) -> Option<QuizGrade> {
        self.grade
    }

    /// Grades the sheet. Returns `None` (and stays open) until every
    /// question is answered.
    pub fn submit(&mut self) -> Option<QuizGrade> {
        let grade = self.quiz.grade(&self.answers).ok()?;
        self.grade = Some(grade);
        Some(grade)
    }

    pub fn retry(&mut self) {
        self.answers = vec![None; self.quiz.len()];
        self.grade = None;
    }

    #[must_use]
    pub fn result_line(&self) -> Option<String> {
        let grade = self.grade?;
        Some(if grade.is_perfect() {
            "Perfect! You're ready to move on.".to_owned()
        } else if grade.percent() >= 80 {
            "Great job! Review the ones you missed and move on.".to_owned()
        } else {
            format!(
                "You got {} out of {}. Review and try again!",
                grade.correct(),
                grade.total()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::Catalog;
    use academy_core::model::LessonKey;

    fn vm() -> QuizVm {
        let catalog = Catalog::standard();
        let quiz = catalog
            .lesson(LessonKey::new(1, 1).unwrap())
            .unwrap()
            .quiz()
            .unwrap()
            .clone();
        QuizVm::new(quiz)
    }

    #[test]
    fn submit_requires_every_answer() {
        let mut vm = vm();
        vm.select(0, 1);
        assert!(!vm.all_answered());
        assert_eq!(vm.submit(), None);
        assert!(!vm.is_submitted());
    }

    #[test]
    fn perfect_run_reports_perfect_line() {
        let mut vm = vm();
        let answers: Vec<usize> = vm.questions().iter().map(QuizQuestion::answer).collect();
        for (i, answer) in answers.into_iter().enumerate() {
            vm.select(i, answer);
        }
        let grade = vm.submit().unwrap();
        assert!(grade.is_perfect());
        assert_eq!(
            vm.result_line().unwrap(),
            "Perfect! You're ready to move on."
        );

        // locked after submit
        vm.select(0, 0);
        assert_eq!(vm.answer(0), Some(vm.questions()[0].answer()));
    }

    #[test]
    fn retry_clears_the_sheet() {
        let mut vm = vm();
        vm.select(0, 0);
        vm.select(1, 0);
        vm.submit().unwrap();

        vm.retry();
        assert!(!vm.is_submitted());
        assert_eq!(vm.answer(0), None);
        assert_eq!(vm.result_line(), None);
    }

    #[test]
    fn partial_score_line_counts_misses() {
        let mut vm = vm();
        vm.select(0, vm.questions()[0].answer());
        let wrong = (vm.questions()[1].answer() + 1) % vm.questions()[1].options().len();
        vm.select(1, wrong);
        vm.submit().unwrap();
        assert_eq!(
            vm.result_line().unwrap(),
            "You got 1 out of 2. Review and try again!"
        );
    }
}
