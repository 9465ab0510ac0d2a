use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("a question needs at least two options")]
    TooFewOptions,

    #[error("answer index {answer} is out of range for {options} options")]
    AnswerOutOfRange { answer: usize, options: usize },

    #[error("expected {expected} answers, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },

    #[error("question {index} is unanswered")]
    Unanswered { index: usize },
}

/// A single multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    answer: usize,
}

impl QuizQuestion {
    /// Creates a question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for fewer than two options or an out-of-range
    /// answer index.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: usize,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions);
        }
        if answer >= options.len() {
            return Err(QuizError::AnswerOutOfRange {
                answer,
                options: options.len(),
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            options,
            answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> usize {
        self.answer
    }
}

/// An ordered list of questions graded by exact-match counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty list.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Grades a full answer sheet.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongAnswerCount` if the sheet length differs and
    /// `QuizError::Unanswered` for the first missing answer.
    pub fn grade(&self, answers: &[Option<usize>]) -> Result<QuizGrade, QuizError> {
        if answers.len() != self.questions.len() {
            return Err(QuizError::WrongAnswerCount {
                expected: self.questions.len(),
                got: answers.len(),
            });
        }
        let mut correct = 0_usize;
        for (index, (question, answer)) in self.questions.iter().zip(answers).enumerate() {
            let answer = answer.ok_or(QuizError::Unanswered { index })?;
            if answer == question.answer {
                correct += 1;
            }
        }
        Ok(QuizGrade {
            correct,
            total: self.questions.len(),
        })
    }
}

/// Outcome of grading one quiz submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizGrade {
    correct: usize,
    total: usize,
}

impl QuizGrade {
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

    /// Score as a rounded percentage.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let percent = ((self.correct as f64 / self.total as f64) * 100.0).round() as u8;
        percent.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(vec![
            QuizQuestion::new(
                "What is the most important trait for an entrepreneur?",
                vec![
                    "Creativity".into(),
                    "Persistence".into(),
                    "Luck".into(),
                    "Money".into(),
                ],
                1,
            )
            .unwrap(),
            QuizQuestion::new(
                "What does YC emphasize most?",
                vec![
                    "Perfect product".into(),
                    "Solving real problems".into(),
                    "Big team".into(),
                    "Fancy office".into(),
                ],
                1,
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn all_correct_is_perfect_score() {
        let grade = quiz().grade(&[Some(1), Some(1)]).unwrap();
        assert!(grade.is_perfect());
        assert_eq!(grade.percent(), 100);
    }

    #[test]
    fn partial_credit_counts_matches() {
        let grade = quiz().grade(&[Some(1), Some(0)]).unwrap();
        assert_eq!(grade.correct(), 1);
        assert_eq!(grade.percent(), 50);
    }

    #[test]
    fn unanswered_question_is_rejected() {
        let err = quiz().grade(&[Some(1), None]).unwrap_err();
        assert_eq!(err, QuizError::Unanswered { index: 1 });
    }

    #[test]
    fn wrong_sheet_length_is_rejected() {
        let err = quiz().grade(&[Some(1)]).unwrap_err();
        assert_eq!(
            err,
            QuizError::WrongAnswerCount {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn question_rejects_out_of_range_answer() {
        let err = QuizQuestion::new("q", vec!["a".into(), "b".into()], 2).unwrap_err();
        assert_eq!(
            err,
            QuizError::AnswerOutOfRange {
                answer: 2,
                options: 2
            }
        );
    }

    #[test]
    fn five_question_grade_rounds_percent() {
        let questions = (0..5)
            .map(|i| QuizQuestion::new(format!("q{i}"), vec!["a".into(), "b".into()], 0).unwrap())
            .collect();
        let quiz = Quiz::new(questions).unwrap();
        let grade = quiz
            .grade(&[Some(0), Some(0), Some(0), Some(0), Some(1)])
            .unwrap();
        assert_eq!(grade.percent(), 80);
    }
}
