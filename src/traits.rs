use crate::chunk::Chunks;
use crate::evaluation::Evaluation;
use serde::{Deserialize, Serialize};

/// Seed from which an exercise regenerates its content.
pub type Seed = u64;

#[derive(Debug, thiserror::Error)]
pub enum MemorizerError {
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("file type not supported: {0}, use .yaml")]
    UnsupportedFile(String),

    #[error("session already finished")]
    SessionFinished,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MemorizerError>;

/// The kind of symbols an exercise is built from.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    #[default]
    Digits,
    Binary,
}

impl ExerciseKind {
    /// The symbols content is sampled from.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            ExerciseKind::Digits => &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            ExerciseKind::Binary => &['0', '1'],
        }
    }
}

/// Everything needed to rebuild an exercise, without the content itself.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Deserialize, Serialize)]
pub struct ExerciseRecord {
    pub kind: ExerciseKind,
    pub length: usize,
    pub stride: usize,
    pub seed: Seed,
}

/// Something to memorize.
///
/// The content is built once, at construction, and never changes afterwards. Presentation
/// happens in chunks of `stride` symbols through two independent cursors, one for learning and
/// one for testing. Neither cursor can be rewound; create a new exercise to replay.
pub trait Exercise: std::fmt::Debug {
    /// The kind of symbols in this exercise.
    fn kind(&self) -> ExerciseKind;

    /// The full content to be remembered.
    fn components(&self) -> &str;

    /// Number of symbols shown at the same time.
    fn stride(&self) -> usize;

    /// Number of symbols in the content.
    fn length(&self) -> usize {
        self.components().chars().count()
    }

    /// Whether the position of a symbol carries meaning.
    fn order(&self) -> bool;

    /// Generate the content for this instance. Must be deterministic for a given seed.
    fn build_content(&self) -> Result<String> {
        Err(MemorizerError::Unsupported("build content"))
    }

    /// Capture what is needed to regenerate this exercise later.
    fn persist_seed(&self) -> Result<ExerciseRecord> {
        Err(MemorizerError::Unsupported("persist seed"))
    }

    /// Chunks to present during the learning phase.
    fn learning(&mut self) -> Chunks<'_>;

    /// Chunks to present while testing the user.
    fn testing(&mut self) -> Chunks<'_>;

    /// Compare the user's answer against the content.
    fn evaluate(&self, candidate: &str) -> Evaluation;
}
