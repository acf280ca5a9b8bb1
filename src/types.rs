use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqCoverError};

/// One of the `N` events under test, numbered `0..N`.
pub type Symbol = usize;

/// Mixed-radix address of an ordered tuple: `s0·N^(t-1) + … + s(t-1)`.
pub type TupleKey = u64;

/// Interaction strength of the covering array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Strength {
    Three,
    Four,
}

impl Strength {
    pub fn as_usize(self) -> usize {
        match self {
            Strength::Three => 3,
            Strength::Four => 4,
        }
    }

    /// Number of orderings of one symbol set (`t!`).
    pub fn orderings(self) -> u64 {
        match self {
            Strength::Three => 6,
            Strength::Four => 24,
        }
    }
}

impl TryFrom<usize> for Strength {
    type Error = SeqCoverError;

    fn try_from(t: usize) -> Result<Self> {
        match t {
            3 => Ok(Strength::Three),
            4 => Ok(Strength::Four),
            other => Err(SeqCoverError::invalid(format!(
                "strength must be 3 or 4, got {other}"
            ))),
        }
    }
}

impl From<Strength> for usize {
    fn from(s: Strength) -> usize {
        s.as_usize()
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// An ordering of all symbols `0..len`, each exactly once.
///
/// The invariant is checked on construction, so every `Permutation` in a
/// suite is a valid test sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Permutation(Vec<Symbol>);

impl Permutation {
    /// `[0, 1, …, n-1]`
    pub fn identity(n: usize) -> Self {
        Permutation((0..n).collect())
    }

    /// `[n-1, …, 1, 0]`
    pub fn descending(n: usize) -> Self {
        Permutation((0..n).rev().collect())
    }

    /// Validate `symbols` as an ordering of `0..symbols.len()`.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        let mut seen = vec![false; symbols.len()];
        for &s in &symbols {
            match seen.get_mut(s) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(SeqCoverError::invalid(format!(
                        "symbol {s} appears more than once"
                    )))
                }
                None => {
                    return Err(SeqCoverError::invalid(format!(
                        "symbol {s} out of range for {} events",
                        symbols.len()
                    )))
                }
            }
        }
        Ok(Permutation(symbols))
    }

    /// Caller guarantees `symbols` is already a permutation.
    pub(crate) fn from_shuffled(symbols: Vec<Symbol>) -> Self {
        debug_assert!(Permutation::new(symbols.clone()).is_ok());
        Permutation(symbols)
    }

    pub fn reversed(&self) -> Self {
        Permutation(self.0.iter().rev().copied().collect())
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Symbol> {
        self.0
    }
}

impl Deref for Permutation {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.0
    }
}

impl TryFrom<Vec<Symbol>> for Permutation {
    type Error = SeqCoverError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Permutation::new(symbols)
    }
}

impl From<Permutation> for Vec<Symbol> {
    fn from(p: Permutation) -> Vec<Symbol> {
        p.0
    }
}

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalState {
    /// Every tuple of the universe is covered.
    Complete,
    /// The suite reached `max_tests` before coverage was complete.
    Exhausted,
    /// A whole batch of trials added no coverage.
    Stalled,
}

impl TerminalState {
    pub fn is_complete(self) -> bool {
        self == TerminalState::Complete
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminalState::Complete => "complete",
            TerminalState::Exhausted => "exhausted",
            TerminalState::Stalled => "stalled",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_rejects_duplicates_and_out_of_range() {
        assert!(Permutation::new(vec![0, 1, 1]).is_err());
        assert!(Permutation::new(vec![0, 3, 1]).is_err());
        assert!(Permutation::new(vec![2, 0, 1]).is_ok());
        assert!(Permutation::new(Vec::new()).is_ok());
    }

    #[test]
    fn seeds_and_reversal() {
        assert_eq!(Permutation::identity(4).as_slice(), &[0, 1, 2, 3]);
        assert_eq!(Permutation::descending(4).as_slice(), &[3, 2, 1, 0]);
        assert_eq!(Permutation::identity(4).reversed(), Permutation::descending(4));
    }

    #[test]
    fn strength_only_accepts_three_and_four() {
        assert_eq!(Strength::try_from(3).unwrap(), Strength::Three);
        assert_eq!(Strength::try_from(4).unwrap(), Strength::Four);
        for t in [0, 1, 2, 5, 10] {
            assert!(matches!(
                Strength::try_from(t),
                Err(SeqCoverError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn permutation_deserialization_validates() {
        let ok: Permutation = serde_json::from_str("[1,0,2]").unwrap();
        assert_eq!(ok.as_slice(), &[1, 0, 2]);
        assert!(serde_json::from_str::<Permutation>("[1,1,2]").is_err());
    }
}
