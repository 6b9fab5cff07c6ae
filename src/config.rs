use crate::sequence::{SequenceExercise, DEFAULT_LENGTH, DEFAULT_STRIDE};
use crate::traits::*;
use serde::{Deserialize, Serialize};

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_stride() -> usize {
    DEFAULT_STRIDE
}

/// Parameters to construct an exercise from.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct ExerciseConfig {
    #[serde(default)]
    pub kind: ExerciseKind,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_stride")]
    pub stride: usize,
    /// Fixed seed, a fresh one is drawn if absent.
    #[serde(default)]
    pub seed: Option<Seed>,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        ExerciseConfig {
            kind: ExerciseKind::Digits,
            length: DEFAULT_LENGTH,
            stride: DEFAULT_STRIDE,
            seed: None,
        }
    }
}

impl ExerciseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(MemorizerError::InvalidConfig(format!(
                "stride must be at least 1 for {:?} exercise of length {}",
                self.kind, self.length
            )));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Box<dyn Exercise>> {
        self.validate()?;
        let exercise = match self.seed {
            Some(seed) => SequenceExercise::with_seed(self.kind, self.length, self.stride, seed)?,
            None => SequenceExercise::new(self.kind, self.length, self.stride)?,
        };
        Ok(Box::new(exercise))
    }
}

/// Load a list of exercise configurations from a yaml file.
pub fn load_exercise_configs(filename: &str) -> Result<Vec<ExerciseConfig>> {
    if !(filename.ends_with(".yaml") || filename.ends_with(".yml")) {
        return Err(MemorizerError::UnsupportedFile(filename.to_owned()));
    }
    let file = std::fs::File::open(filename)?;
    let configs: Vec<ExerciseConfig> = serde_yaml::from_reader(file)?;
    for config in configs.iter() {
        config.validate()?;
    }
    tracing::debug!(filename, count = configs.len(), "loaded exercise configs");
    Ok(configs)
}
