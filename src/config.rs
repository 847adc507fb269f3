use std::env;
use std::path::PathBuf;

use crate::quiz::error::BankError;
use crate::quiz::QuestionBank;

pub const QUESTIONS_PATH_VAR: &str = "QUIZ_QUESTIONS_PATH";

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// JSON question file to use instead of the built-in questions.
    pub questions_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            questions_path: env::var_os(QUESTIONS_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn load_bank(&self) -> Result<QuestionBank, BankError> {
        match &self.questions_path {
            Some(path) => {
                log::info!("Loading questions from {}", path.display());
                QuestionBank::from_file(path)
            }
            None => {
                log::info!("Loading built-in questions");
                QuestionBank::builtin()
            }
        }
    }
}
