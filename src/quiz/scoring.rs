//! Scoring over a question bank and a snapshot of answers.
//!
//! Everything here is a pure function of its inputs. A slot that is missing
//! from `answers` or holds `None` counts as not correct.

use super::{Question, QuestionBank};

pub fn is_correct(bank: &QuestionBank, answers: &[Option<usize>], index: usize) -> bool {
    match (bank.get(index), answers.get(index).copied().flatten()) {
        (Ok(question), Some(selected)) => selected == question.correct_option_index,
        _ => false,
    }
}

pub fn points_earned(bank: &QuestionBank, answers: &[Option<usize>], index: usize) -> u32 {
    match bank.get(index) {
        Ok(question) if is_correct(bank, answers, index) => question.points,
        _ => 0,
    }
}

pub fn correct_count(bank: &QuestionBank, answers: &[Option<usize>]) -> usize {
    (0..bank.len())
        .filter(|&i| is_correct(bank, answers, i))
        .count()
}

pub fn total_points(bank: &QuestionBank, answers: &[Option<usize>]) -> u32 {
    (0..bank.len()).map(|i| points_earned(bank, answers, i)).sum()
}

/// `round(100 * correct / total)`, halves round up.
///
/// `total` must be positive.
pub fn percentage(correct: usize, total: usize) -> u32 {
    debug_assert!(total > 0, "percentage of an empty quiz");
    ((200 * correct + total) / (2 * total)) as u32
}

pub fn score_percentage(bank: &QuestionBank, answers: &[Option<usize>]) -> u32 {
    percentage(correct_count(bank, answers), bank.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub selected: Option<usize>,
    pub correct: bool,
    pub points_earned: u32,
    pub points_available: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub outcomes: Vec<QuestionOutcome>,
    pub correct_count: usize,
    pub question_count: usize,
    pub total_points: u32,
    pub max_points: u32,
    pub percentage: u32,
}

impl ScoreReport {
    pub fn performance(&self) -> Performance {
        Performance::from_percentage(self.percentage)
    }
}

pub fn evaluate(bank: &QuestionBank, answers: &[Option<usize>]) -> ScoreReport {
    let outcomes: Vec<QuestionOutcome> = bank
        .iter()
        .enumerate()
        .map(|(i, question)| outcome(question, answers.get(i).copied().flatten()))
        .collect();

    ScoreReport {
        outcomes,
        correct_count: correct_count(bank, answers),
        question_count: bank.len(),
        total_points: total_points(bank, answers),
        max_points: bank.max_points(),
        percentage: score_percentage(bank, answers),
    }
}

fn outcome(question: &Question, selected: Option<usize>) -> QuestionOutcome {
    let correct = selected == Some(question.correct_option_index);
    QuestionOutcome {
        selected,
        correct,
        points_earned: if correct { question.points } else { 0 },
        points_available: question.points,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Outstanding,
    Excellent,
    WellDone,
    GoodEffort,
    KeepPracticing,
}

impl Performance {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Performance::Outstanding,
            80..=89 => Performance::Excellent,
            70..=79 => Performance::WellDone,
            60..=69 => Performance::GoodEffort,
            _ => Performance::KeepPracticing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Performance::Outstanding => "Outstanding Performance! 🌟",
            Performance::Excellent => "Excellent Work! 🎉",
            Performance::WellDone => "Well Done! 👏",
            Performance::GoodEffort => "Good Effort! 👍",
            Performance::KeepPracticing => "Keep Practicing! 💪",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Performance::Outstanding => "🏆",
            Performance::Excellent => "🎊",
            Performance::WellDone => "💪",
            Performance::GoodEffort => "📈",
            Performance::KeepPracticing => "🎯",
        }
    }
}
