//! Chat rendering of a quiz session.
//!
//! Every view is a pure function of the question bank and a [`QuizState`]
//! snapshot, producing HTML text and an inline keyboard.

pub mod action;
pub mod palette;
pub mod question;
pub mod results;

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::quiz::state::Phase;
use crate::quiz::{QuestionBank, QuizState};
pub use action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Question,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Renders `screen`. The results screen is only available after submission;
/// before that the question screen is shown instead.
pub fn render(bank: &QuestionBank, quiz: &QuizState, screen: Screen) -> Rendered {
    match (screen, quiz.phase()) {
        (Screen::Results, Phase::Completed) => results::render(bank, quiz),
        _ => question::render(bank, quiz),
    }
}

pub(crate) fn button(text: impl Into<String>, action: Action) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.to_string())
}
