//! Memory training exercises.

// An exercise is a generated sequence that is presented in chunks for learning, again for
// testing, and then compared with what the user remembered.

/// Main traits
pub mod traits;

/// Chunked presentation and its cursor.
pub mod chunk;

/// Comparison of answers with the reference.
pub mod evaluation;

/// Digit and binary sequences.
pub mod sequence;

/// Loading exercise parameters.
pub mod config;

/// Simple implementation to keep records
pub mod recorder;

/// Implementor for a training loop.
pub mod training;
