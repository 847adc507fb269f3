use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html::{bold, escape, italic};

use super::{button, palette, Action, Rendered};
use crate::quiz::{scoring, Question, QuestionBank, QuizState, OPTION_COUNT};

const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// Question screen for the current question. After submission it becomes a
/// read-only review with correctness feedback.
pub fn render(bank: &QuestionBank, quiz: &QuizState) -> Rendered {
    let question = match bank.get(quiz.current_index()) {
        Ok(question) => question,
        // The state was built for another bank
        Err(err) => {
            log::error!("cannot render question: {}", err);
            return Rendered {
                text: "This quiz is out of date, use /restart.".to_string(),
                keyboard: InlineKeyboardMarkup::new(vec![vec![button(
                    "🔄 Restart",
                    Action::Restart,
                )]]),
            };
        }
    };

    if quiz.is_submitted() {
        review(bank, quiz, question)
    } else {
        answering(quiz, question)
    }
}

fn header(question: &Question) -> String {
    format!(
        "{} {} · {} {} • {}pts",
        escape(&question.icon),
        italic(&escape(&question.category)),
        question.difficulty.badge(),
        question.difficulty.label(),
        question.points
    )
}

fn answering(quiz: &QuizState, question: &Question) -> Rendered {
    let text = format!(
        "{}\n\n{}\n\n{}\n\n{}",
        palette::progress(quiz),
        header(question),
        bold(&escape(&question.prompt)),
        palette::legend()
    );

    let selected = quiz.current_answer();
    let mut rows: Vec<Vec<InlineKeyboardButton>> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if selected == Some(i) { "🔘" } else { "◯" };
            let text = format!("{} {}. {}", mark, OPTION_LETTERS[i], option);
            vec![button(text, Action::Select(i))]
        })
        .collect();

    let mut nav = Vec::new();
    if !quiz.is_first_question() {
        nav.push(button("← Previous", Action::Previous));
    }
    if !quiz.is_last_question() {
        nav.push(button("Next →", Action::Next));
    }
    // Offered on the last question even with gaps, so an early submit can be rejected
    if quiz.all_answered() || quiz.is_last_question() {
        nav.push(button("🚀 Submit", Action::Submit));
    }
    rows.push(nav);
    rows.extend(palette::rows(quiz));

    Rendered {
        text,
        keyboard: InlineKeyboardMarkup::new(rows),
    }
}

fn review(bank: &QuestionBank, quiz: &QuizState, question: &Question) -> Rendered {
    let index = quiz.current_index();
    let selected = quiz.answer(index);
    let correct = scoring::is_correct(bank, quiz.answers(), index);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if i == question.correct_option_index {
                "✅"
            } else if selected == Some(i) {
                "❌"
            } else {
                "▫️"
            };
            format!("{} {}. {}", mark, OPTION_LETTERS[i], escape(option))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let verdict = match (selected, correct) {
        (None, _) => "Not answered.",
        (Some(_), true) => "Correct!",
        (Some(_), false) => "Incorrect.",
    };

    let text = format!(
        "Review · Q{}/{}\n\n{}\n\n{}\n\n{}\n\n{} {}/{} points\n💡 {}",
        index + 1,
        quiz.question_count(),
        header(question),
        bold(&escape(&question.prompt)),
        options,
        bold(verdict),
        scoring::points_earned(bank, quiz.answers(), index),
        question.points,
        italic(&escape(&question.explanation))
    );

    let mut nav = Vec::new();
    if !quiz.is_first_question() {
        nav.push(button("← Previous", Action::Previous));
    }
    if !quiz.is_last_question() {
        nav.push(button("Next →", Action::Next));
    }

    let mut rows = Vec::new();
    if !nav.is_empty() {
        rows.push(nav);
    }
    rows.push(vec![
        button("📊 Results", Action::Results),
        button("🔄 Restart", Action::Restart),
    ]);

    Rendered {
        text,
        keyboard: InlineKeyboardMarkup::new(rows),
    }
}
