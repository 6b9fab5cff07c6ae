//! Sequences of random digits or binary digits.

use crate::chunk::{Chunks, PresentationCursor};
use crate::evaluation::{evaluate, Evaluation};
use crate::traits::*;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_LENGTH: usize = 10;
pub const DEFAULT_STRIDE: usize = 4;

/// Draw `length` symbols uniformly from the alphabet of `kind`, reproducibly for a seed.
pub fn generate(kind: ExerciseKind, length: usize, seed: Seed) -> String {
    let alphabet = kind.alphabet();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let symbol = Uniform::from(0..alphabet.len());
    (0..length)
        .map(|_| alphabet[symbol.sample(&mut rng)])
        .collect()
}

/// A sequence exercise where the order of the symbols matters.
#[derive(Debug, Clone)]
pub struct SequenceExercise {
    kind: ExerciseKind,
    length: usize,
    stride: usize,
    seed: Seed,
    components: String,
    learning: PresentationCursor,
    testing: PresentationCursor,
}

impl SequenceExercise {
    /// New exercise with a freshly drawn seed.
    pub fn new(kind: ExerciseKind, length: usize, stride: usize) -> Result<Self> {
        Self::with_seed(kind, length, stride, rand::random::<Seed>())
    }

    /// New exercise whose content is fully determined by the seed.
    pub fn with_seed(kind: ExerciseKind, length: usize, stride: usize, seed: Seed) -> Result<Self> {
        if stride == 0 {
            tracing::warn!(?kind, length, stride, "rejected exercise with zero stride");
            return Err(MemorizerError::InvalidConfig(
                "stride must be at least 1".to_owned(),
            ));
        }
        Ok(Self::build(kind, length, stride, seed))
    }

    /// Decimal digits with the default length and stride.
    pub fn digits() -> Self {
        Self::build(
            ExerciseKind::Digits,
            DEFAULT_LENGTH,
            DEFAULT_STRIDE,
            rand::random::<Seed>(),
        )
    }

    /// Binary digits with the default length and stride.
    pub fn binary() -> Self {
        Self::build(
            ExerciseKind::Binary,
            DEFAULT_LENGTH,
            DEFAULT_STRIDE,
            rand::random::<Seed>(),
        )
    }

    fn build(kind: ExerciseKind, length: usize, stride: usize, seed: Seed) -> Self {
        let mut exercise = SequenceExercise {
            kind,
            length,
            stride,
            seed,
            components: String::new(),
            learning: PresentationCursor::new(),
            testing: PresentationCursor::new(),
        };
        // The only place content is built; build_content returns the same string.
        exercise.components = exercise.content();
        tracing::debug!(?kind, length, stride, seed, "built sequence exercise");
        exercise
    }

    fn content(&self) -> String {
        generate(self.kind, self.length, self.seed)
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl Exercise for SequenceExercise {
    fn kind(&self) -> ExerciseKind {
        self.kind
    }

    fn components(&self) -> &str {
        &self.components
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn length(&self) -> usize {
        self.length
    }

    fn order(&self) -> bool {
        true
    }

    fn build_content(&self) -> Result<String> {
        Ok(self.content())
    }

    fn persist_seed(&self) -> Result<ExerciseRecord> {
        Ok(ExerciseRecord {
            kind: self.kind,
            length: self.length,
            stride: self.stride,
            seed: self.seed,
        })
    }

    fn learning(&mut self) -> Chunks<'_> {
        Chunks::new(&self.components, self.stride, &mut self.learning)
    }

    // Same chunks as learning, nothing is masked yet.
    fn testing(&mut self) -> Chunks<'_> {
        Chunks::new(&self.components, self.stride, &mut self.testing)
    }

    fn evaluate(&self, candidate: &str) -> Evaluation {
        let evaluation = evaluate(&self.components, candidate);
        tracing::debug!(
            kind = ?self.kind,
            compared = evaluation.compared(),
            mistakes = evaluation.mistakes(),
            "evaluated answer"
        );
        evaluation
    }
}

impl ExerciseRecord {
    /// Rebuild the exercise this record was taken from.
    pub fn restore(&self) -> Result<SequenceExercise> {
        SequenceExercise::with_seed(self.kind, self.length, self.stride, self.seed)
    }
}
