//! Completion announcements.
//!
//! When a quiz moves from in-progress to completed, a plain-text summary is
//! handed to an [`Announcer`]. Showing it and dismissing it again is up to the
//! announcer.

use super::scoring::ScoreReport;

pub trait Announcer {
    fn announce(&mut self, message: &str);
}

/// Collects announcements so they can be delivered after the transition.
impl Announcer for Vec<String> {
    fn announce(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

pub fn completion_summary(report: &ScoreReport) -> String {
    format!(
        "Quiz completed! You scored {} out of {} questions correctly, earning {} points.",
        report.correct_count, report.question_count, report.total_points
    )
}
