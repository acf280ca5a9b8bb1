//! The address space of ordered t-tuples over `N` events.
//!
//! A tuple is covered by a permutation when its symbols occur in the
//! permutation in the same relative order, at any positions. The universe
//! holds every ordered tuple of `t` distinct symbols, `N·(N-1)·…·(N-t+1)` of
//! them. Tuples are addressed by a mixed-radix [`TupleKey`] so the coverage
//! set never materialises tuples with repeated symbols.

use crate::error::{Result, SeqCoverError};
use crate::types::{Strength, Symbol, TupleKey};

/// Falling factorial `n·(n-1)·…·(n-t+1)`: the number of ordered t-tuples of
/// distinct symbols drawn from `0..n`.
pub fn universe_size(n: usize, t: usize) -> Result<u64> {
    let strength = Strength::try_from(t)?;
    check_events(n, strength)?;
    falling_factorial(n, t)
}

/// Every ordered t-tuple of distinct symbols from `0..n`, lexicographically.
pub fn all_tuples(n: usize, t: usize) -> Result<AllTuples> {
    let universe = TupleUniverse::new(n, Strength::try_from(t)?)?;
    Ok(universe.tuples())
}

/// The `C(N,t)` subsequence tuples of `permutation`: one per strictly
/// increasing choice of `t` positions, symbols taken in position order.
pub fn extract_tuples(permutation: &[Symbol], strength: Strength) -> ExtractTuples<'_> {
    ExtractTuples {
        permutation,
        combos: PositionCombinations::new(permutation.len(), strength.as_usize()),
    }
}

/// Binomial coefficient, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

fn falling_factorial(n: usize, t: usize) -> Result<u64> {
    (0..t).try_fold(1u64, |acc, i| {
        acc.checked_mul((n - i) as u64)
            .ok_or_else(|| SeqCoverError::invalid(format!("universe for {n} events overflows u64")))
    })
}

fn check_events(n: usize, strength: Strength) -> Result<()> {
    if n < strength.as_usize() {
        return Err(SeqCoverError::invalid(format!(
            "need at least {strength} events for strength {strength}, got {n}"
        )));
    }
    Ok(())
}

/// Fixed tuple universe for one `(N, t)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleUniverse {
    events: usize,
    strength: Strength,
    size: u64,
    key_space: u64,
}

impl TupleUniverse {
    pub fn new(events: usize, strength: Strength) -> Result<Self> {
        check_events(events, strength)?;
        let t = strength.as_usize();
        let key_space = (events as u64).checked_pow(t as u32).ok_or_else(|| {
            SeqCoverError::invalid(format!(
                "{events} events at strength {strength} exceed the tuple key space"
            ))
        })?;
        Ok(Self {
            events,
            strength,
            size: falling_factorial(events, t)?,
            key_space,
        })
    }

    pub fn events(&self) -> usize {
        self.events
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Number of valid tuples.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Encode a tuple of `t` symbols.
    pub fn key(&self, tuple: &[Symbol]) -> TupleKey {
        debug_assert_eq!(tuple.len(), self.strength.as_usize());
        let radix = self.events as u64;
        tuple.iter().fold(0, |acc, &s| acc * radix + s as u64)
    }

    pub fn decode(&self, mut key: TupleKey) -> Vec<Symbol> {
        let radix = self.events as u64;
        let mut out = vec![0; self.strength.as_usize()];
        for slot in out.iter_mut().rev() {
            *slot = (key % radix) as Symbol;
            key /= radix;
        }
        out
    }

    /// Visit the key of every subsequence tuple of `permutation` without
    /// allocating per tuple.
    pub fn for_each_key(&self, permutation: &[Symbol], mut f: impl FnMut(TupleKey)) {
        let radix = self.events as u64;
        let mut combos = PositionCombinations::new(permutation.len(), self.strength.as_usize());
        while let Some(positions) = combos.positions() {
            let key = positions
                .iter()
                .fold(0, |acc, &p| acc * radix + permutation[p] as u64);
            f(key);
            combos.advance();
        }
    }

    pub fn tuples(&self) -> AllTuples {
        AllTuples {
            universe: self.clone(),
            next_key: 0,
        }
    }
}

/// Cursor over strictly increasing choices of `k` positions out of `n`, in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct PositionCombinations {
    n: usize,
    idx: Vec<usize>,
    exhausted: bool,
}

impl PositionCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idx: (0..k).collect(),
            exhausted: k > n,
        }
    }

    /// Current choice, or `None` once every choice has been visited.
    pub fn positions(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.idx)
        }
    }

    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        let k = self.idx.len();
        // rightmost slot that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.idx[i] < self.n - k + i) else {
            self.exhausted = true;
            return;
        };
        self.idx[i] += 1;
        for j in i + 1..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
    }
}

impl Iterator for PositionCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let out = self.positions()?.to_vec();
        self.advance();
        Some(out)
    }
}

/// Iterator returned by [`extract_tuples`].
#[derive(Debug, Clone)]
pub struct ExtractTuples<'a> {
    permutation: &'a [Symbol],
    combos: PositionCombinations,
}

impl Iterator for ExtractTuples<'_> {
    type Item = Vec<Symbol>;

    fn next(&mut self) -> Option<Vec<Symbol>> {
        let tuple = self
            .combos
            .positions()?
            .iter()
            .map(|&p| self.permutation[p])
            .collect();
        self.combos.advance();
        Some(tuple)
    }
}

/// Iterator returned by [`all_tuples`] and [`TupleUniverse::tuples`].
#[derive(Debug, Clone)]
pub struct AllTuples {
    universe: TupleUniverse,
    next_key: TupleKey,
}

impl Iterator for AllTuples {
    type Item = Vec<Symbol>;

    fn next(&mut self) -> Option<Vec<Symbol>> {
        while self.next_key < self.universe.key_space {
            let tuple = self.universe.decode(self.next_key);
            self.next_key += 1;
            if all_distinct(&tuple) {
                return Some(tuple);
            }
        }
        None
    }
}

fn all_distinct(tuple: &[Symbol]) -> bool {
    tuple
        .iter()
        .enumerate()
        .all(|(i, s)| !tuple[..i].contains(s))
}
