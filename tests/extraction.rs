use std::collections::HashSet;

use quickcheck::quickcheck;
use seqcover::{binomial, extract_tuples, universe_size, Permutation, Strength};

/// Build a permutation of `n` symbols from arbitrary swap choices.
fn permutation_from(n: usize, swaps: &[usize]) -> Permutation {
    let mut v: Vec<usize> = (0..n).collect();
    for (i, &s) in swaps.iter().enumerate() {
        if n > 1 {
            v.swap(i % n, s % n);
        }
    }
    Permutation::new(v).unwrap()
}

quickcheck! {
    fn extraction_yields_binomial_many_distinct_tuples(n: u8, swaps: Vec<usize>, four: bool) -> bool {
        let n = 4 + (n as usize % 6);
        let strength = if four { Strength::Four } else { Strength::Three };
        let perm = permutation_from(n, &swaps);
        let tuples: Vec<Vec<usize>> = extract_tuples(&perm, strength).collect();
        let distinct: HashSet<&Vec<usize>> = tuples.iter().collect();
        tuples.len() as u64 == binomial(n, strength.as_usize())
            && distinct.len() == tuples.len()
    }
}

quickcheck! {
    fn extracted_tuples_keep_relative_order(swaps: Vec<usize>) -> bool {
        let perm = permutation_from(7, &swaps);
        let pos = |s: usize| perm.iter().position(|&x| x == s).unwrap();
        extract_tuples(&perm, Strength::Three).all(|t| pos(t[0]) < pos(t[1]) && pos(t[1]) < pos(t[2]))
    }
}

#[test]
fn universe_sizes_for_small_event_counts() {
    let expected3 = [(3, 6), (4, 24), (5, 60), (6, 120), (10, 720)];
    for (n, size) in expected3 {
        assert_eq!(universe_size(n, 3).unwrap(), size);
    }
    let expected4 = [(4, 24), (5, 120), (6, 360), (10, 5040)];
    for (n, size) in expected4 {
        assert_eq!(universe_size(n, 4).unwrap(), size);
    }
}
