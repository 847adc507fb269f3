use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A button press, carried in the callback data of inline keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Next,
    Previous,
    GoTo(usize),
    Submit,
    Restart,
    Results,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("unknown action '{0}'")]
    Unknown(String),

    #[error("action '{tag}' expects a number, got '{value}'")]
    BadNumber { tag: String, value: String },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Select(option) => write!(f, "sel:{}", option),
            Action::Next => f.write_str("next"),
            Action::Previous => f.write_str("prev"),
            Action::GoTo(index) => write!(f, "goto:{}", index),
            Action::Submit => f.write_str("submit"),
            Action::Restart => f.write_str("restart"),
            Action::Results => f.write_str("results"),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let (tag, arg) = match data.split_once(':') {
            Some((tag, arg)) => (tag, Some(arg)),
            None => (data, None),
        };

        let number = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| ParseActionError::BadNumber {
                    tag: tag.to_string(),
                    value: value.to_string(),
                })
        };

        match (tag, arg) {
            ("sel", Some(arg)) => Ok(Action::Select(number(arg)?)),
            ("goto", Some(arg)) => Ok(Action::GoTo(number(arg)?)),
            ("next", None) => Ok(Action::Next),
            ("prev", None) => Ok(Action::Previous),
            ("submit", None) => Ok(Action::Submit),
            ("restart", None) => Ok(Action::Restart),
            ("results", None) => Ok(Action::Results),
            _ => Err(ParseActionError::Unknown(data.to_string())),
        }
    }
}
