use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::{BankError, QuizError};
use super::{Question, OPTION_COUNT};

const BUILTIN_QUESTIONS: &str = include_str!("../../questions.json");

/// Largest bank the chat screens can show: the palette, the unanswered list
/// and the review buttons all grow with it.
pub const MAX_QUESTIONS: usize = 20;

/// Limit on the combined text of one question, keeping every screen that
/// shows it under Telegram's message size.
pub const MAX_QUESTION_TEXT: usize = 2000;

/// The ordered, read-only set of questions for every session.
/// Question numbering follows the order of `questions`.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        if questions.len() > MAX_QUESTIONS {
            return Err(BankError::TooLarge {
                len: questions.len(),
                max: MAX_QUESTIONS,
            });
        }

        let mut ids = HashSet::new();
        for question in &questions {
            if !ids.insert(question.id.as_str()) {
                return Err(BankError::DuplicateId(question.id.clone()));
            }
            if question.correct_option_index >= OPTION_COUNT {
                return Err(BankError::InvalidQuestion {
                    id: question.id.clone(),
                    reason: format!(
                        "correct option index {} is not below {}",
                        question.correct_option_index, OPTION_COUNT
                    ),
                });
            }
            if question.points == 0 {
                return Err(BankError::InvalidQuestion {
                    id: question.id.clone(),
                    reason: "points must be positive".to_string(),
                });
            }
            if text_len(question) > MAX_QUESTION_TEXT {
                return Err(BankError::InvalidQuestion {
                    id: question.id.clone(),
                    reason: format!("text is longer than {} characters", MAX_QUESTION_TEXT),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The question set compiled into the binary.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_reader(BUILTIN_QUESTIONS.as_bytes())
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

fn text_len(question: &Question) -> usize {
    [
        &question.prompt,
        &question.explanation,
        &question.category,
        &question.icon,
    ]
    .into_iter()
    .chain(&question.options)
    .map(|text| text.chars().count())
    .sum()
}
