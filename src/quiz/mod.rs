pub mod announce;
pub mod bank;
pub mod error;
pub mod scoring;
pub mod state;

pub use bank::QuestionBank;
pub use state::QuizState;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    #[serde(alias = "correctAnswer")]
    pub correct_option_index: usize,
    pub explanation: String,
    pub points: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub icon: String,
}

impl Question {
    /// Display-only fields (explanation, difficulty, category, icon) are left
    /// at their defaults.
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option_index: usize,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
            correct_option_index,
            points,
            ..Default::default()
        }
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_option_index]
    }

    /// Text of the option at `index`, if it exists.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

// Display-only, has no effect on scoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
        }
    }
}
