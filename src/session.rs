use crate::quiz::error::QuizError;
use crate::quiz::state::SubmitOutcome;
use crate::quiz::{QuestionBank, QuizState};
use crate::view::{Action, Screen};

/// One-shot feedback for a button press. Never stored with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Short notification that disappears on its own.
    Toast(String),
    /// Popup the user has to dismiss.
    Alert(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub screen: Screen,
    pub notice: Option<Notice>,
}

impl Step {
    fn show(screen: Screen) -> Self {
        Self {
            screen,
            notice: None,
        }
    }
}

/// Applies a button press to the chat's quiz and picks the screen to show.
pub fn apply(bank: &QuestionBank, quiz: &mut QuizState, action: Action) -> Result<Step, QuizError> {
    log::debug!("applying {:?} at question {}", action, quiz.current_index());

    let step = match action {
        Action::Select(option) => {
            quiz.select_answer(option)?;
            Step::show(Screen::Question)
        }
        Action::Next => {
            quiz.go_next();
            Step::show(Screen::Question)
        }
        Action::Previous => {
            quiz.go_previous();
            Step::show(Screen::Question)
        }
        Action::GoTo(index) => {
            quiz.go_to(index)?;
            Step::show(Screen::Question)
        }
        Action::Submit => submit(bank, quiz),
        Action::Restart => {
            quiz.restart();
            Step::show(Screen::Question)
        }
        Action::Results => Step::show(Screen::Results),
    };

    Ok(step)
}

fn submit(bank: &QuestionBank, quiz: &mut QuizState) -> Step {
    let mut announcements: Vec<String> = Vec::new();

    match quiz.submit(bank, &mut announcements) {
        SubmitOutcome::Completed(report) => {
            log::info!(
                "quiz completed: {}/{} correct, {} points",
                report.correct_count,
                report.question_count,
                report.total_points
            );
            Step {
                screen: Screen::Results,
                notice: Some(Notice::Toast(announcements.join("\n"))),
            }
        }
        SubmitOutcome::Rejected { unanswered } => {
            let numbers = unanswered
                .iter()
                .map(|i| (i + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Step {
                screen: Screen::Question,
                notice: Some(Notice::Alert(format!(
                    "⚠️ Please answer every question before submitting.\nUnanswered: {}",
                    numbers
                ))),
            }
        }
        SubmitOutcome::AlreadyCompleted => Step::show(Screen::Results),
    }
}
