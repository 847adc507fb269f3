use teloxide::types::InlineKeyboardButton;

use super::{button, Action};
use crate::quiz::state::SlotStatus;
use crate::quiz::QuizState;

const BUTTONS_PER_ROW: usize = 5;
const PROGRESS_BAR_WIDTH: usize = 10;

fn marker(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Answered => "✅",
        SlotStatus::Current => "🔵",
        SlotStatus::NotAnswered => "🟠",
        SlotStatus::NotVisited => "⚪",
    }
}

pub fn label(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Answered => "answered",
        SlotStatus::Current => "current",
        SlotStatus::NotAnswered => "not answered",
        SlotStatus::NotVisited => "not visited",
    }
}

/// Jump buttons for every question. Only offered while the quiz is in progress.
pub fn rows(quiz: &QuizState) -> Vec<Vec<InlineKeyboardButton>> {
    if quiz.is_submitted() {
        return Vec::new();
    }

    let buttons = (0..quiz.question_count())
        .map(|i| {
            let text = format!("{} {}", marker(quiz.slot_status(i)), i + 1);
            button(text, Action::GoTo(i))
        })
        .collect::<Vec<_>>();

    buttons
        .chunks(BUTTONS_PER_ROW)
        .map(|row| row.to_vec())
        .collect()
}

pub fn legend() -> String {
    [
        SlotStatus::Answered,
        SlotStatus::Current,
        SlotStatus::NotAnswered,
        SlotStatus::NotVisited,
    ]
    .iter()
    .map(|s| format!("{} {}", marker(*s), label(*s)))
    .collect::<Vec<_>>()
    .join("  ")
}

/// `Q2/5 · answered 1/5` followed by a bar filled in proportion to answers.
pub fn progress(quiz: &QuizState) -> String {
    let total = quiz.question_count();
    let answered = quiz.answered_count();
    let filled = if total == 0 {
        0
    } else {
        answered * PROGRESS_BAR_WIDTH / total
    };

    format!(
        "Q{}/{} · answered {}/{}\n{}{}",
        quiz.current_index() + 1,
        total,
        answered,
        total,
        "▰".repeat(filled),
        "▱".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
