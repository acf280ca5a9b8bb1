use honggfuzz::fuzz;
use seqcover::{extract_tuples, CoverageTracker, Permutation, Strength, TupleUniverse};

/// Decode fuzz bytes into a strength, an event count and a run of
/// permutations, then check that committed coverage agrees with the
/// extracted tuples.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&head, rest)) = data.split_first() else {
                return;
            };
            let strength = if head & 1 == 0 { Strength::Three } else { Strength::Four };
            let n = strength.as_usize() + (head as usize >> 1) % 6;
            let universe = TupleUniverse::new(n, strength).unwrap();
            let mut tracker = CoverageTracker::new(universe);
            let mut seen = std::collections::HashSet::new();

            for chunk in rest.chunks(n) {
                let mut v: Vec<usize> = (0..n).collect();
                for (i, &b) in chunk.iter().enumerate() {
                    v.swap(i, b as usize % n);
                }
                let perm = Permutation::new(v).unwrap();
                let fresh = extract_tuples(&perm, strength)
                    .filter(|t| seen.insert(t.clone()))
                    .count() as u64;
                assert_eq!(tracker.commit(&perm), fresh);
                assert_eq!(tracker.covered_count(), seen.len() as u64);
            }
        });
    }
}
