//! Движок кено: проверка билета, тираж, совпадения, выплата, сессия.
//!
//! Высокоуровневый объект: `Session`
//! Основные операции:
//!   - `validate_ticket` – проверить билет против правил игры
//!   - `RoundEngine::play_round` – один раунд (тираж -> совпадения -> выплата)
//!   - `Session::play` – все раунды билета с накоплением итогов

pub mod errors;
pub mod payout;
pub mod round;
pub mod session;
pub mod validation;

pub use errors::{ConfigError, EngineError, ValidationError};
pub use payout::compute_payout;
pub use round::RoundEngine;
pub use session::Session;
pub use validation::validate_ticket;

use std::ops::RangeInclusive;

use crate::domain::BoardNumber;

/// Верхняя граница (не включительно) для seed, который сессия выводит
/// из текущего RNG при `reseed(None)`.
pub const DERIVED_SEED_LIMIT: u64 = 65_535;

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртка над `rand`) и в тестах.
pub trait RandomSource {
    /// `k` различных номеров из `range` без возвращения, равномерно.
    /// Порядок результата не важен: движок сортирует тираж сам.
    ///
    /// Если `k` больше размера диапазона — `ConfigError::InsufficientBoardRange`,
    /// выборка никогда не обрезается.
    fn sample_without_replacement(
        &mut self,
        range: RangeInclusive<BoardNumber>,
        k: usize,
    ) -> Result<Vec<BoardNumber>, ConfigError>;

    /// Новый seed из текущего потока, в диапазоне `0..DERIVED_SEED_LIMIT`.
    fn next_seed(&mut self) -> u64;

    /// Перезапустить поток с данного seed.
    fn reseed(&mut self, seed: u64);
}
