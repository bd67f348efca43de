use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Learning-path filter accepted by the catalog endpoints. `All` keeps every
/// module; the rest keep modules of exactly that difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFilter {
    All,
    Easy,
    Medium,
    Hard,
}

impl PathFilter {
    /// Parses the wire value of a filter. Unknown values are the caller's
    /// problem to report; no normalization beyond the exact four tokens.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(PathFilter::All),
            "easy" => Some(PathFilter::Easy),
            "medium" => Some(PathFilter::Medium),
            "hard" => Some(PathFilter::Hard),
            _ => None,
        }
    }

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            PathFilter::All => true,
            PathFilter::Easy => difficulty == Difficulty::Easy,
            PathFilter::Medium => difficulty == Difficulty::Medium,
            PathFilter::Hard => difficulty == Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub content: String,
    #[serde(rename = "hasExercise")]
    pub has_exercise: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub lessons: Vec<Lesson>,
}
