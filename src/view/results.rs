use teloxide::types::InlineKeyboardMarkup;
use teloxide::utils::html::{bold, escape, italic};

use super::{button, Action, Rendered};
use crate::quiz::scoring::QuestionOutcome;
use crate::quiz::{Question, QuestionBank, QuizState};

const REVIEW_BUTTONS_PER_ROW: usize = 5;

/// Telegram's message limit, in UTF-16 code units of the parsed text.
const MESSAGE_LIMIT: usize = 4096;
// Room kept for the line that replaces analyses which do not fit
const OVERFLOW_RESERVE: usize = 100;

pub fn render(bank: &QuestionBank, quiz: &QuizState) -> Rendered {
    let report = quiz.report(bank);
    let performance = report.performance();

    let mut text = format!(
        "{} {}\n\n🎯 Correct answers: {}/{}\n📈 Success rate: {}%\n⭐ Points earned: {} of {}\n\n{}",
        performance.emoji(),
        bold(performance.message()),
        report.correct_count,
        report.question_count,
        report.percentage,
        report.total_points,
        report.max_points,
        bold("Question Analysis 📊")
    );

    for (i, (question, outcome)) in bank.iter().zip(&report.outcomes).enumerate() {
        let entry = analysis(i, question, outcome);
        // Markup counts here too, so the estimate errs on the long side
        if message_len(&text) + message_len(&entry) + 2 + OVERFLOW_RESERVE > MESSAGE_LIMIT {
            text.push_str(&format!(
                "\n\n…{} more, open them with the buttons below.",
                bank.len() - i
            ));
            break;
        }
        text.push_str("\n\n");
        text.push_str(&entry);
    }

    let review = (0..bank.len())
        .map(|i| {
            let mark = if report.outcomes[i].correct { "✓" } else { "✗" };
            button(format!("{} {}", mark, i + 1), Action::GoTo(i))
        })
        .collect::<Vec<_>>();

    let mut rows = review
        .chunks(REVIEW_BUTTONS_PER_ROW)
        .map(|row| row.to_vec())
        .collect::<Vec<_>>();
    rows.push(vec![button("🔄 Restart", Action::Restart)]);

    Rendered {
        text,
        keyboard: InlineKeyboardMarkup::new(rows),
    }
}

fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn analysis(index: usize, question: &Question, outcome: &QuestionOutcome) -> String {
    let mark = if outcome.correct { "✓" } else { "✗" };
    let your_answer = outcome
        .selected
        .and_then(|selected| question.option(selected))
        .map(escape)
        .unwrap_or_else(|| "Not answered".to_string());

    let mut lines = vec![
        format!(
            "{} {} {}",
            mark,
            bold(&format!("Question {}", index + 1)),
            escape(&question.icon)
        ),
        escape(&question.prompt),
        format!("Your answer: {}", your_answer),
    ];
    if !outcome.correct {
        lines.push(format!(
            "Correct answer: {}",
            escape(question.correct_option())
        ));
    }
    lines.push(format!(
        "{}/{} pts · {}",
        outcome.points_earned,
        outcome.points_available,
        italic(question.difficulty.label())
    ));

    lines.join("\n")
}
