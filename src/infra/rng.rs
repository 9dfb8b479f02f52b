use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::config::board_span;
use crate::domain::BoardNumber;
use crate::engine::{ConfigError, RandomSource, DERIVED_SEED_LIMIT};

/// Детерминированный RNG для сессий, тестов и реплея.
/// Одинаковый seed -> одинаковая серия тиражей.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Из полного 32-байтового seed (см. `RngSeed`).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }

    /// Алгоритм Флойда прямо по значениям: O(k) памяти при любом размере
    /// диапазона. Нужен, когда размер поля не помещается в usize.
    fn sample_floyd(&mut self, min: BoardNumber, max: BoardNumber, k: usize) -> Vec<BoardNumber> {
        if k == 0 {
            return Vec::new();
        }

        // k <= размер поля, поэтому first >= min.
        let first = (i128::from(max) - k as i128 + 1) as BoardNumber;
        let mut chosen = BTreeSet::new();
        for j in first..=max {
            let t = self.inner.gen_range(min..=j);
            if !chosen.insert(t) {
                chosen.insert(j);
            }
        }
        chosen.into_iter().collect()
    }
}

impl RandomSource for DeterministicRng {
    fn sample_without_replacement(
        &mut self,
        range: RangeInclusive<BoardNumber>,
        k: usize,
    ) -> Result<Vec<BoardNumber>, ConfigError> {
        let (min, max) = (*range.start(), *range.end());
        let size = board_span(min, max);
        if k as u128 > size {
            return Err(ConfigError::InsufficientBoardRange {
                draw_count: k as u64,
                board_size: size,
            });
        }

        let draw = match usize::try_from(size) {
            // Выбираем индексы 0..size, номер = min + индекс. Поле не материализуется.
            Ok(len) => rand::seq::index::sample(&mut self.inner, len, k)
                .into_iter()
                .map(|i| (i128::from(min) + i as i128) as BoardNumber)
                .collect(),
            Err(_) => self.sample_floyd(min, max, k),
        };
        Ok(draw)
    }

    fn next_seed(&mut self) -> u64 {
        self.inner.gen_range(0..DERIVED_SEED_LIMIT)
    }

    fn reseed(&mut self, seed: u64) {
        self.inner = StdRng::seed_from_u64(seed);
    }
}

/// Seed из энтропии ОС, когда игрок не задал свой.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}
