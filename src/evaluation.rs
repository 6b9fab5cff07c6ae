use serde::{Deserialize, Serialize};

/// Marks a position in a report that carries no symbol.
pub const PLACEHOLDER: char = '_';

/// Outcome of comparing an answer to the reference, position by position.
///
/// `matches` holds the reference symbol where the answer agrees, `differences` holds the
/// answer's symbol where it does not; the other report has a placeholder at that position.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize, Serialize)]
pub struct Evaluation {
    pub matches: String,
    pub differences: String,
    /// Number of symbols in the reference.
    pub reference_length: usize,
    /// Number of compared positions where the answer was wrong.
    pub mistakes: usize,
}

impl Evaluation {
    /// Number of positions that were compared.
    pub fn compared(&self) -> usize {
        self.matches.chars().count()
    }

    /// Number of positions where the answer was wrong.
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// True if every symbol of the reference was given correctly.
    pub fn is_perfect(&self) -> bool {
        self.compared() == self.reference_length && self.mistakes() == 0
    }
}

/// Compare a candidate with the reference. Comparison stops at the end of the shorter of the
/// two, so a short candidate silently drops the trailing reference symbols.
pub fn evaluate(reference: &str, candidate: &str) -> Evaluation {
    let mut matches = String::with_capacity(reference.len());
    let mut differences = String::with_capacity(reference.len());
    let mut mistakes = 0;
    for (expected, proposed) in reference.chars().zip(candidate.chars()) {
        if expected == proposed {
            matches.push(expected);
            differences.push(PLACEHOLDER);
        } else {
            matches.push(PLACEHOLDER);
            differences.push(proposed);
            mistakes += 1;
        }
    }
    Evaluation {
        matches,
        differences,
        reference_length: reference.chars().count(),
        mistakes,
    }
}
