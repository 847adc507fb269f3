use super::announce::{completion_summary, Announcer};
use super::error::QuizError;
use super::scoring::{self, ScoreReport};
use super::{QuestionBank, OPTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Completed,
}

/// Completion status of a single slot, as shown by the question palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Answered,
    Current,
    NotAnswered,
    NotVisited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed(ScoreReport),
    /// Some slots are still empty. Nothing was changed.
    Rejected { unanswered: Vec<usize> },
    AlreadyCompleted,
}

/// Answers, position and submission flag of one quiz session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizState {
    answers: Vec<Option<usize>>,
    current_index: usize,
    submitted: bool,
}

impl QuizState {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![None; question_count],
            current_index: 0,
            submitted: false,
        }
    }

    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self::new(bank.len())
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answer(self.current_index)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Completed
        } else {
            Phase::InProgress
        }
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn unanswered(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_first_question(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.answers.len()
    }

    pub fn slot_status(&self, index: usize) -> SlotStatus {
        if self.answer(index).is_some() {
            SlotStatus::Answered
        } else if index == self.current_index {
            SlotStatus::Current
        } else if index < self.current_index {
            SlotStatus::NotAnswered
        } else {
            SlotStatus::NotVisited
        }
    }

    /// Records `option` for the current question, replacing any earlier pick.
    /// Ignored once the quiz is submitted.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        if self.submitted {
            log::debug!("ignoring selection of option {} after submit", option);
            return Ok(());
        }
        if option >= OPTION_COUNT {
            return Err(QuizError::InvalidArgument { index: option });
        }

        let current = self.current_index;
        if let Some(slot) = self.answers.get_mut(current) {
            *slot = Some(option);
        }
        Ok(())
    }

    pub fn go_next(&mut self) {
        if !self.is_last_question() {
            self.current_index += 1;
        }
    }

    pub fn go_previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Jumps to any question. Allowed after submission too, for review.
    pub fn go_to(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.answers.len() {
            return Err(QuizError::OutOfRange {
                index,
                len: self.answers.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Completes the quiz if every question has an answer.
    ///
    /// On the transition to completed, a summary is passed to `announcer`.
    pub fn submit(
        &mut self,
        bank: &QuestionBank,
        announcer: &mut dyn Announcer,
    ) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::AlreadyCompleted;
        }

        let unanswered = self.unanswered();
        if !unanswered.is_empty() {
            log::debug!("submit rejected, unanswered: {:?}", unanswered);
            return SubmitOutcome::Rejected { unanswered };
        }

        self.submitted = true;
        let report = scoring::evaluate(bank, &self.answers);
        announcer.announce(&completion_summary(&report));
        SubmitOutcome::Completed(report)
    }

    /// Scores the current answers. Meaningful once submitted.
    pub fn report(&self, bank: &QuestionBank) -> ScoreReport {
        scoring::evaluate(bank, &self.answers)
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.answers.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank::tests::sample_bank;

    fn answer_all(state: &mut QuizState, picks: &[usize]) {
        for (i, &pick) in picks.iter().enumerate() {
            state.go_to(i).unwrap();
            state.select_answer(pick).unwrap();
        }
    }

    #[test]
    fn fresh_state() {
        for n in 1..=7 {
            let state = QuizState::new(n);
            assert_eq!(state.answers(), vec![None; n].as_slice());
            assert_eq!(state.current_index(), 0);
            assert!(!state.is_submitted());
            assert_eq!(state.phase(), Phase::InProgress);
            assert_eq!(state.answered_count(), 0);
        }
    }

    #[test]
    fn last_selection_wins() {
        let mut state = QuizState::new(5);
        state.select_answer(1).unwrap();
        state.select_answer(3).unwrap();
        assert_eq!(state.answers()[0], Some(3));
        assert_eq!(state.answered_count(), 1);
    }

    #[test]
    fn select_rejects_bad_option() {
        let mut state = QuizState::new(5);
        assert_eq!(
            state.select_answer(4),
            Err(QuizError::InvalidArgument { index: 4 })
        );
        assert_eq!(state, QuizState::new(5));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut state = QuizState::new(3);
        state.go_previous();
        assert_eq!(state.current_index(), 0);
        assert!(state.is_first_question());

        for _ in 0..10 {
            state.go_next();
        }
        assert_eq!(state.current_index(), 2);
        assert!(state.is_last_question());

        state.go_previous();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn go_to_is_free_but_bounded() {
        let mut state = QuizState::new(5);
        state.go_to(4).unwrap();
        assert_eq!(state.current_index(), 4);
        assert_eq!(
            state.go_to(5),
            Err(QuizError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn submit_rejected_with_gap() {
        let bank = sample_bank();
        let mut state = QuizState::for_bank(&bank);
        answer_all(&mut state, &[0, 1, 2, 1, 3]);
        state.restart();
        for (i, pick) in [(0, 0), (2, 2), (3, 1), (4, 3)] {
            state.go_to(i).unwrap();
            state.select_answer(pick).unwrap();
        }
        let before = state.clone();

        let mut announced: Vec<String> = Vec::new();
        let outcome = state.submit(&bank, &mut announced);

        assert_eq!(outcome, SubmitOutcome::Rejected { unanswered: vec![1] });
        assert_eq!(state, before);
        assert_eq!(state.answers(), &[Some(0), None, Some(2), Some(1), Some(3)]);
        assert!(announced.is_empty());
    }

    #[test]
    fn submit_completes_and_announces() {
        let bank = sample_bank();
        let mut state = QuizState::for_bank(&bank);
        answer_all(&mut state, &[0, 1, 0, 3, 2]);

        let mut announced: Vec<String> = Vec::new();
        let outcome = state.submit(&bank, &mut announced);

        let SubmitOutcome::Completed(report) = outcome else {
            panic!("expected completion, got {:?}", outcome);
        };
        assert_eq!(report.correct_count, 3);
        assert_eq!(report.total_points, 7);
        assert_eq!(report.percentage, 60);
        assert!(state.is_submitted());
        assert_eq!(state.phase(), Phase::Completed);
        assert_eq!(announced.len(), 1);
        assert!(announced[0].contains("3 out of 5"));
        assert!(announced[0].contains("7 points"));

        assert_eq!(
            state.submit(&bank, &mut announced),
            SubmitOutcome::AlreadyCompleted
        );
        assert_eq!(announced.len(), 1);
    }

    #[test]
    fn answers_frozen_after_submit() {
        let bank = sample_bank();
        let mut state = QuizState::for_bank(&bank);
        answer_all(&mut state, &[0, 1, 2, 3, 0]);
        state.submit(&bank, &mut Vec::<String>::new());

        let frozen = state.answers().to_vec();
        state.go_to(2).unwrap();
        assert_eq!(state.select_answer(1), Ok(()));
        assert_eq!(state.select_answer(9), Ok(()));
        assert_eq!(state.answers(), frozen.as_slice());

        state.go_next();
        state.go_previous();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn restart_matches_fresh_state() {
        let bank = sample_bank();
        let fresh = QuizState::for_bank(&bank);

        let mut state = fresh.clone();
        state.go_to(3).unwrap();
        state.select_answer(2).unwrap();
        state.restart();
        assert_eq!(state, fresh);

        answer_all(&mut state, &[3, 3, 3, 3, 3]);
        state.submit(&bank, &mut Vec::<String>::new());
        assert!(state.is_submitted());
        state.restart();
        assert_eq!(state, fresh);

        let outcome = state.submit(&bank, &mut Vec::<String>::new());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                unanswered: vec![0, 1, 2, 3, 4]
            }
        );
        assert!(!state.is_submitted());
    }

    #[test]
    fn derived_values() {
        let mut state = QuizState::new(4);
        state.go_to(2).unwrap();
        state.select_answer(0).unwrap();
        assert_eq!(state.answered_count(), 1);
        assert!(!state.all_answered());
        assert_eq!(state.unanswered(), vec![0, 1, 3]);
        assert_eq!(state.current_answer(), Some(0));
        assert_eq!(state.answer(1), None);
        assert_eq!(state.answer(10), None);
    }

    #[test]
    fn slot_statuses() {
        let mut state = QuizState::new(4);
        state.go_to(1).unwrap();
        state.select_answer(2).unwrap();
        state.go_to(2).unwrap();

        assert_eq!(state.slot_status(0), SlotStatus::NotAnswered);
        assert_eq!(state.slot_status(1), SlotStatus::Answered);
        assert_eq!(state.slot_status(2), SlotStatus::Current);
        assert_eq!(state.slot_status(3), SlotStatus::NotVisited);

        state.go_to(1).unwrap();
        assert_eq!(state.slot_status(1), SlotStatus::Answered);
    }
}
