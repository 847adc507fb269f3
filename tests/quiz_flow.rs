use quiz_bot::quiz::state::{Phase, SubmitOutcome};
use quiz_bot::quiz::{QuestionBank, QuizState};
use quiz_bot::session::{self, Notice};
use quiz_bot::view::{self, Action, Screen};

// Correct options of the built-in questions: Paris, Mars, Pacific, Harper Lee, Au
const CORRECT: [usize; 5] = [2, 1, 3, 0, 2];

fn answer(quiz: &mut QuizState, picks: &[usize]) {
    for (i, &pick) in picks.iter().enumerate() {
        quiz.go_to(i).unwrap();
        quiz.select_answer(pick).unwrap();
    }
}

#[test]
fn partially_correct_quiz() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizState::for_bank(&bank);
    answer(&mut quiz, &[2, 1, 0, 0, 0]);

    let mut announced: Vec<String> = Vec::new();
    let SubmitOutcome::Completed(report) = quiz.submit(&bank, &mut announced) else {
        panic!("quiz should complete");
    };

    assert_eq!(report.correct_count, 3);
    assert_eq!(report.total_points, 7);
    assert_eq!(report.percentage, 60);
    assert_eq!(
        announced,
        vec!["Quiz completed! You scored 3 out of 5 questions correctly, earning 7 points.".to_string()]
    );
}

#[test]
fn perfect_quiz() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizState::for_bank(&bank);
    answer(&mut quiz, &CORRECT);

    let SubmitOutcome::Completed(report) = quiz.submit(&bank, &mut Vec::<String>::new()) else {
        panic!("quiz should complete");
    };
    assert_eq!(report.correct_count, 5);
    assert_eq!(report.percentage, 100);
    assert_eq!(report.total_points, 14);
}

#[test]
fn submit_with_a_gap_changes_nothing() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizState::for_bank(&bank);
    for (i, pick) in [(0, 0), (2, 2), (3, 1), (4, 3)] {
        quiz.go_to(i).unwrap();
        quiz.select_answer(pick).unwrap();
    }
    let before = quiz.clone();

    let outcome = quiz.submit(&bank, &mut Vec::<String>::new());
    assert_eq!(outcome, SubmitOutcome::Rejected { unanswered: vec![1] });
    assert_eq!(quiz, before);
    assert_eq!(quiz.phase(), Phase::InProgress);
}

#[test]
fn restart_clears_previous_answers() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizState::for_bank(&bank);
    answer(&mut quiz, &CORRECT);
    quiz.submit(&bank, &mut Vec::<String>::new());
    assert_eq!(quiz.phase(), Phase::Completed);

    quiz.restart();
    assert_eq!(quiz, QuizState::for_bank(&bank));
    assert!(matches!(
        quiz.submit(&bank, &mut Vec::<String>::new()),
        SubmitOutcome::Rejected { .. }
    ));
}

#[test]
fn chat_session_from_start_to_results() {
    let bank = QuestionBank::builtin().unwrap();
    let mut quiz = QuizState::for_bank(&bank);

    let mut actions = Vec::new();
    for pick in CORRECT {
        actions.push(Action::Select(pick));
        actions.push(Action::Next);
    }

    // Next on the last question does nothing
    let mut step = None;
    for data in actions.iter().map(Action::to_string) {
        let action: Action = data.parse().unwrap();
        step = Some(session::apply(&bank, &mut quiz, action).unwrap());
    }
    assert_eq!(quiz.current_index(), 4);
    assert_eq!(step.map(|s| s.screen), Some(Screen::Question));

    let step = session::apply(&bank, &mut quiz, Action::Submit).unwrap();
    assert!(matches!(step.notice, Some(Notice::Toast(_))));

    let rendered = view::render(&bank, &quiz, step.screen);
    assert!(rendered.text.contains("Outstanding Performance!"));
    assert!(rendered.text.contains("Points earned: 14 of 14"));
    assert!(rendered.text.contains("What is the capital of France?"));

    session::apply(&bank, &mut quiz, Action::GoTo(0)).unwrap();
    let rendered = view::render(&bank, &quiz, Screen::Question);
    assert!(rendered.text.contains("✅ C. Paris"));
    assert!(rendered.text.contains("Paris is the capital"));
}
