use crate::domain::{BoardNumber, Stake};

use thiserror::Error;

/// Билет нарушает правила игры. Ошибка исправима игроком:
/// каждый вариант называет плохое значение и нарушенный лимит.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Spots = {0}: должно быть не меньше 1")]
    InvalidSpots(i64),

    #[error("Ставка = {0}: должна быть не меньше 1")]
    InvalidStake(Stake),

    #[error("Раундов = {0}: должно быть не меньше 1")]
    InvalidRounds(i64),

    #[error("Список номеров пуст")]
    EmptyNumbers,

    #[error("Spots = {spots}, но номеров в билете {numbers}")]
    SpotsNumbersMismatch { spots: i64, numbers: usize },

    #[error("Spots = {spots} слишком много, лимит {max_spots}")]
    TooManySpots { spots: i64, max_spots: u32 },

    #[error("Ставка {stake} слишком большая, лимит {max_stake}")]
    StakeTooLarge { stake: Stake, max_stake: Stake },

    #[error("Номера должны быть уникальными, повторяются: {duplicates:?}")]
    DuplicateNumbers { duplicates: Vec<BoardNumber> },

    #[error("Номера {numbers:?} вне поля, допустимо от {min} до {max}")]
    NumberOutOfRange {
        numbers: Vec<BoardNumber>,
        min: BoardNumber,
        max: BoardNumber,
    },
}

/// Структурно несогласованный конфиг игры или таблица выплат.
/// На уровне билета не исправляется, падаем при сборке сессии.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Неверный диапазон поля: min = {min}, max = {max} (нужно min < max)")]
    InvalidBoardRange { min: BoardNumber, max: BoardNumber },

    #[error("max_spots = {0}: должно быть больше 0")]
    InvalidMaxSpots(u32),

    #[error("max_stake = {0}: должно быть больше 0")]
    InvalidMaxStake(Stake),

    #[error("draw_count = {0}: должно быть больше 0")]
    InvalidDrawCount(u32),

    #[error("draw_count = {draw_count} больше, чем номеров на поле ({board_size})")]
    InsufficientBoardRange { draw_count: u64, board_size: u128 },

    #[error("Множитель {multiplier} для {matches} совпадений: должен быть конечным и >= 0")]
    InvalidMultiplier { matches: u32, multiplier: f64 },
}

/// Ошибки движка кено.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Билет не прошёл проверку: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] ConfigError),
}
