//! RNG tests for keno-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие тиражей
//! - выборку без возвращения (без повторов, только из диапазона)
//! - отказ вместо обрезки, если k больше диапазона
//! - грубую равномерность тиража
//! - reseed / next_seed
//! - стабильность hash-вывода RngSeed

use std::ops::RangeInclusive;

use keno_engine::engine::{ConfigError, RandomSource, DERIVED_SEED_LIMIT};
use keno_engine::infra::{DeterministicRng, RngSeed};

fn board() -> RangeInclusive<i64> {
    1..=80
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_sample() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    for _ in 0..20 {
        assert_eq!(
            r1.sample_without_replacement(board(), 20).unwrap(),
            r2.sample_without_replacement(board(), 20).unwrap(),
            "Same seed must produce identical draws"
        );
    }
}

//
// TEST 2 — different seeds produce different draws
//
#[test]
fn deterministic_rng_different_seeds_different_sample() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    assert_ne!(
        r1.sample_without_replacement(board(), 20).unwrap(),
        r2.sample_without_replacement(board(), 20).unwrap(),
        "Different seeds must produce different draws"
    );
}

//
// TEST 3 — sample has no duplicates and stays inside the range
//
#[test]
fn sample_is_distinct_and_from_range() {
    let range = 100..=140;
    let mut rng = DeterministicRng::from_seed(555);

    for k in [0usize, 1, 5, 41] {
        let mut s = rng.sample_without_replacement(range.clone(), k).unwrap();
        assert_eq!(s.len(), k);
        assert!(s.iter().all(|x| range.contains(x)));

        s.sort_unstable();
        s.dedup();
        assert_eq!(s.len(), k, "sample must not repeat elements");
    }
}

//
// TEST 4 — full-size sample is a permutation
//
#[test]
fn full_sample_is_permutation() {
    let mut rng = DeterministicRng::from_seed(9);
    let mut s = rng.sample_without_replacement(board(), 80).unwrap();
    s.sort_unstable();
    assert_eq!(s, board().collect::<Vec<i64>>());
}

//
// TEST 5 — rough uniformity: each number drawn ~ draw_count / board_size of the time
//
#[test]
fn draws_are_roughly_uniform() {
    const DRAWS: usize = 20_000;
    let mut rng = DeterministicRng::from_seed(4096);
    let mut counts = [0usize; 81];

    for _ in 0..DRAWS {
        for n in rng.sample_without_replacement(board(), 20).unwrap() {
            counts[n as usize] += 1;
        }
    }

    // ожидаем 5000 на номер, допускаем ±10%
    for n in 1..=80 {
        assert!(
            (4_500..=5_500).contains(&counts[n]),
            "number {n} drawn {} times",
            counts[n]
        );
    }
}

//
// TEST 6 — reseed restarts the stream
//
#[test]
fn reseed_restarts_stream() {
    let mut rng = DeterministicRng::from_seed(77);
    let first = rng.sample_without_replacement(board(), 20).unwrap();
    rng.sample_without_replacement(board(), 20).unwrap();

    rng.reseed(77);
    assert_eq!(rng.sample_without_replacement(board(), 20).unwrap(), first);
}

//
// TEST 7 — derived seeds stay below the limit
//
#[test]
fn next_seed_in_range() {
    let mut rng = DeterministicRng::from_seed(1);
    for _ in 0..1000 {
        assert!(rng.next_seed() < DERIVED_SEED_LIMIT);
    }
}

//
// TEST 8 — RngSeed hash pipeline
//
#[test]
fn rngseed_derive_changes_per_session() {
    let base = RngSeed::from_u64(777);

    let s1 = base.derive(0);
    let s2 = base.derive(1);
    assert_ne!(s1, s2, "Different session indexes must produce different seeds");
    assert_eq!(s1, base.derive(0), "Derivation must be deterministic");

    let other = RngSeed::from_u64(778).derive(0);
    assert_ne!(s1, other, "Different master seeds must produce different seeds");
}

//
// TEST 9 — RngSeed → DeterministicRng → sample is deterministic
//
#[test]
fn rngseed_deterministic_sample() {
    let seed = RngSeed::from_u64(123).derive(5);

    let mut r1 = seed.to_rng();
    let mut r2 = seed.to_rng();

    assert_eq!(
        r1.sample_without_replacement(board(), 20).unwrap(),
        r2.sample_without_replacement(board(), 20).unwrap()
    );
}

//
// TEST 10 — empty range with k = 0 must not crash
//
#[test]
fn sample_from_empty_range_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    assert!(rng.sample_without_replacement(1..=0, 0).unwrap().is_empty());
}

//
// TEST 11 — k larger than the range is an error, never a shorter draw
//
#[test]
fn oversized_sample_is_rejected() {
    let mut rng = DeterministicRng::from_seed(42);

    assert_eq!(
        rng.sample_without_replacement(1..=10, 11),
        Err(ConfigError::InsufficientBoardRange {
            draw_count: 11,
            board_size: 10
        })
    );
    assert_eq!(
        rng.sample_without_replacement(1..=0, 1),
        Err(ConfigError::InsufficientBoardRange {
            draw_count: 1,
            board_size: 0
        })
    );
}

//
// TEST 12 — huge and full-width ranges are sampled without building them
//
#[test]
fn sample_from_huge_ranges() {
    let mut rng = DeterministicRng::from_seed(2040);

    let big = 1..=(1i64 << 40);
    let mut s = rng.sample_without_replacement(big.clone(), 20).unwrap();
    assert!(s.iter().all(|x| big.contains(x)));
    s.sort_unstable();
    s.dedup();
    assert_eq!(s.len(), 20);

    // 2^64 номеров: больше, чем usize на 64-битной платформе.
    let mut s = rng.sample_without_replacement(i64::MIN..=i64::MAX, 20).unwrap();
    s.sort_unstable();
    s.dedup();
    assert_eq!(s.len(), 20);

    // Верхний край диапазона достижим.
    let tail = rng.sample_without_replacement((i64::MAX - 2)..=i64::MAX, 3).unwrap();
    let mut tail_sorted = tail.clone();
    tail_sorted.sort_unstable();
    assert_eq!(tail_sorted, vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]);
}

//
// TEST 13 — full-width range is reproducible too
//
#[test]
fn full_width_range_is_deterministic() {
    let mut r1 = DeterministicRng::from_seed(64);
    let mut r2 = DeterministicRng::from_seed(64);

    assert_eq!(
        r1.sample_without_replacement(i64::MIN..=i64::MAX, 20).unwrap(),
        r2.sample_without_replacement(i64::MIN..=i64::MAX, 20).unwrap()
    );
}
