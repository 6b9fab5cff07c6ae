use crate::evaluation::Evaluation;
use crate::recorder::{Record, Recorder};
use crate::traits::*;

/*
Implements the generic flow;
    Build exercise
    Load Recorder

    Learning: present chunks until exhausted.
    Testing: present chunks again.
    Obtain answer

    Evaluate answer
    store seed + evaluation
        -> Recorder
*/

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Phase {
    Learning,
    Testing,
    Finished,
}

/// Drives one exercise through learning, testing and evaluation.
#[derive(Debug)]
pub struct Training {
    exercise: Box<dyn Exercise>,
    recorder: Box<dyn Recorder>,
    phase: Phase,
}

impl Training {
    pub fn new(exercise: Box<dyn Exercise>, recorder: Box<dyn Recorder>) -> Self {
        Training {
            exercise,
            recorder,
            phase: Phase::Learning,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn exercise(&self) -> &dyn Exercise {
        &*self.exercise
    }

    pub fn recorder(&self) -> &dyn Recorder {
        &*self.recorder
    }

    /// Next chunk to learn, None once learning is over.
    pub fn next_learning_chunk(&mut self) -> Option<String> {
        if self.phase != Phase::Learning {
            return None;
        }
        let chunk = self.exercise.learning().next().map(str::to_owned);
        if chunk.is_none() {
            self.phase = Phase::Testing;
        }
        chunk
    }

    /// Next chunk to test, ends the learning phase if it was still running.
    pub fn next_testing_chunk(&mut self) -> Option<String> {
        if self.phase == Phase::Finished {
            return None;
        }
        self.phase = Phase::Testing;
        self.exercise.testing().next().map(str::to_owned)
    }

    /// Evaluate the answer and store it, only one answer is accepted.
    pub fn answer(&mut self, candidate: &str) -> Result<Evaluation> {
        if self.phase == Phase::Finished {
            return Err(MemorizerError::SessionFinished);
        }
        let evaluation = self.exercise.evaluate(candidate);
        let record = Record {
            exercise: self.exercise.persist_seed()?,
            evaluation: evaluation.clone(),
            time: std::time::SystemTime::now(),
        };
        self.recorder.store_record(&record)?;
        self.phase = Phase::Finished;
        tracing::info!(
            kind = ?record.exercise.kind,
            seed = record.exercise.seed,
            mistakes = evaluation.mistakes(),
            perfect = evaluation.is_perfect(),
            "training finished"
        );
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{Chunks, PresentationCursor};
    use crate::recorder::MemoryRecorder;
    use crate::sequence::SequenceExercise;

    #[test]
    fn test_full_flow() {
        let exercise = SequenceExercise::with_seed(ExerciseKind::Digits, 10, 4, 99).unwrap();
        let expected = exercise.components().to_owned();
        let mut training = Training::new(Box::new(exercise), Box::new(MemoryRecorder::new()));
        assert_eq!(training.exercise().components(), expected);
        assert_eq!(training.exercise().persist_seed().unwrap().seed, 99);

        let mut learned = String::new();
        while let Some(chunk) = training.next_learning_chunk() {
            assert_eq!(training.phase(), Phase::Learning);
            learned.push_str(&chunk);
        }
        assert_eq!(learned, expected);
        assert_eq!(training.phase(), Phase::Testing);

        let mut tested = String::new();
        while let Some(chunk) = training.next_testing_chunk() {
            tested.push_str(&chunk);
        }
        assert_eq!(tested, expected);

        let evaluation = training.answer(&expected).unwrap();
        assert!(evaluation.is_perfect());
        assert_eq!(training.phase(), Phase::Finished);
        assert_eq!(training.next_learning_chunk(), None);
        assert_eq!(training.next_testing_chunk(), None);

        let records = training.recorder().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].exercise.seed, 99);
        assert_eq!(records[0].exercise.restore().unwrap().components(), expected);

        assert!(matches!(
            training.answer(&expected),
            Err(MemorizerError::SessionFinished)
        ));
    }

    #[test]
    fn test_blank_answer_is_not_perfect() {
        let exercise = SequenceExercise::with_seed(ExerciseKind::Digits, 10, 4, 99).unwrap();
        let mut training = Training::new(Box::new(exercise), Box::new(MemoryRecorder::new()));
        let evaluation = training.answer("__________").unwrap();
        assert_eq!(evaluation.mistakes(), 10);
        assert!(!evaluation.is_perfect());
        let records = training.recorder().records().unwrap();
        assert!(!records[0].evaluation.is_perfect());
    }

    #[test]
    fn test_testing_skips_learning() {
        let exercise = SequenceExercise::with_seed(ExerciseKind::Binary, 6, 4, 5).unwrap();
        let mut training = Training::new(Box::new(exercise), Box::new(MemoryRecorder::new()));
        assert!(training.next_testing_chunk().is_some());
        assert_eq!(training.phase(), Phase::Testing);
        assert_eq!(training.next_learning_chunk(), None);
    }

    /// Exercise that keeps the default, unsupported, seed capture.
    #[derive(Debug)]
    struct Fixed {
        cursor: PresentationCursor,
    }

    impl Exercise for Fixed {
        fn kind(&self) -> ExerciseKind {
            ExerciseKind::Digits
        }
        fn components(&self) -> &str {
            "1234"
        }
        fn stride(&self) -> usize {
            2
        }
        fn order(&self) -> bool {
            true
        }
        fn learning(&mut self) -> Chunks<'_> {
            Chunks::new("1234", 2, &mut self.cursor)
        }
        fn testing(&mut self) -> Chunks<'_> {
            Chunks::new("1234", 2, &mut self.cursor)
        }
        fn evaluate(&self, candidate: &str) -> Evaluation {
            crate::evaluation::evaluate("1234", candidate)
        }
    }

    #[test]
    fn test_unsupported_seed_capture() {
        let exercise = Fixed {
            cursor: PresentationCursor::new(),
        };
        assert_eq!(exercise.length(), 4);
        assert!(matches!(
            exercise.build_content(),
            Err(MemorizerError::Unsupported(_))
        ));
        let mut training = Training::new(Box::new(exercise), Box::new(MemoryRecorder::new()));
        assert!(matches!(
            training.answer("1234"),
            Err(MemorizerError::Unsupported(_))
        ));
        assert_eq!(training.phase(), Phase::Learning);
        assert!(training.recorder().records().unwrap().is_empty());
    }
}
