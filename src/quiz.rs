//! Quiz engine
//!
//! Walks the catalog's question list once per pass, keeps a running score, and hands
//! each finished pass to a [`ScoreRecorder`] before starting over from the first question.

use std::sync::Arc;

use crate::catalog::{OPTIONS_PER_QUESTION, QuizQuestion};
use crate::error::{Error, Result, ValidationError};
use crate::session::ScoreRecorder;

/// Current phase of a quiz pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Question shown, not checked yet
    AskingQuestion,
    /// Answer checked, feedback shown until the next question
    ShowingFeedback,
}

/// Outcome of checking an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_option: String },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Correto!".to_string(),
            Feedback::Incorrect { correct_option } => {
                format!("Errado. A resposta certa é: {}", correct_option)
            }
        }
    }
}

/// Result of a completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
}

impl QuizResult {
    pub fn message(&self) -> String {
        format!("Você acertou {} de {} perguntas.", self.score, self.total)
    }
}

/// Quiz state (not persisted)
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Arc<[QuizQuestion]>,
    /// Question count, checked to fit a score record
    total: u32,
    current_index: usize,
    score: u32,
    selected_option: Option<usize>,
    phase: QuizPhase,
    feedback: Option<Feedback>,
    /// Whether the current question already contributed to the score
    scored: bool,
}

impl QuizEngine {
    /// Start a pass at the first question. Fails for an empty question list.
    pub fn new(questions: impl Into<Arc<[QuizQuestion]>>) -> Result<Self> {
        let questions = questions.into();
        let total = question_count(questions.len())?;
        Ok(Self {
            questions,
            total,
            current_index: 0,
            score: 0,
            selected_option: None,
            phase: QuizPhase::AskingQuestion,
            feedback: None,
            scored: false,
        })
    }

    /// Current phase
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// 0-based index of the question being asked
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Question being asked
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    /// Correct answers so far in this pass
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions in a pass
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Selected option (0-based), if any
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    /// Feedback for the last check of the current question
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Select option `index` (0-based). Allowed again after checking.
    pub fn select_option(&mut self, index: usize) -> Result<()> {
        if index >= OPTIONS_PER_QUESTION {
            return Err(ValidationError::OptionOutOfRange(index + 1).into());
        }
        self.selected_option = Some(index);
        Ok(())
    }

    /// Check the selected option against the current question.
    ///
    /// Only the first check of a question can add to the score.
    pub fn check_answer(&mut self) -> Result<&Feedback> {
        let selected = self
            .selected_option
            .ok_or(ValidationError::NoOptionSelected)?;

        let question = &self.questions[self.current_index];
        let feedback = if selected == question.correct_index {
            if !self.scored {
                self.score += 1;
            }
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                correct_option: question.correct_option().to_string(),
            }
        };
        self.scored = true;
        self.phase = QuizPhase::ShowingFeedback;
        Ok(&*self.feedback.insert(feedback))
    }

    /// Move to the next question, checked or not.
    ///
    /// After the last question the pass is recorded once through `recorder`, the engine
    /// starts over, and the finished result is returned. If recording fails the engine
    /// stays on the last question so the pass can be finished again.
    pub fn next_question(&mut self, recorder: &mut impl ScoreRecorder) -> Result<Option<QuizResult>> {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.ask();
            return Ok(None);
        }

        let result = QuizResult {
            score: self.score,
            total: self.total(),
        };
        recorder.record_quiz_result(result.score, result.total)?;
        log::info!("Quiz finished: {}/{}", result.score, result.total);
        self.restart();
        Ok(Some(result))
    }

    /// Back to the first question with a zero score
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.ask();
    }

    fn ask(&mut self) {
        self.selected_option = None;
        self.feedback = None;
        self.scored = false;
        self.phase = QuizPhase::AskingQuestion;
    }
}

/// Question count as a score total: non-zero and within `u32`
fn question_count(len: usize) -> Result<u32> {
    match u32::try_from(len) {
        Ok(0) => Err(Error::Catalog("quiz has no questions".into())),
        Ok(total) => Ok(total),
        Err(_) => Err(Error::Catalog(format!("quiz has too many questions ({})", len))),
    }
}
