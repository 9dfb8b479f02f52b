// src/domain/config.rs

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::{BoardNumber, Stake};
use crate::engine::errors::ConfigError;

/// Игровое поле: диапазон номеров, которые можно отметить в билете.
/// Границы включительные: 1..=80 в классическом кено.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardSettings {
    /// Минимальный номер на поле.
    pub min_number: BoardNumber,
    /// Максимальный номер на поле.
    pub max_number: BoardNumber,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 80,
        }
    }
}

impl BoardSettings {
    /// Сколько номеров всего на поле. В u128: поле i64::MIN..=i64::MAX
    /// содержит 2^64 номеров.
    pub fn size(&self) -> u128 {
        board_span(self.min_number, self.max_number)
    }

    pub fn contains(&self, n: BoardNumber) -> bool {
        self.range().contains(&n)
    }

    /// Диапазон номеров поля. Номера не материализуются.
    pub fn range(&self) -> RangeInclusive<BoardNumber> {
        self.min_number..=self.max_number
    }
}

/// Количество целых в `min..=max` (0 для пустого диапазона), без переполнения.
pub fn board_span(min: BoardNumber, max: BoardNumber) -> u128 {
    if max < min {
        0
    } else {
        u128::from(max.abs_diff(min)) + 1
    }
}

/// Лимиты игрока на один билет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerSettings {
    /// Максимум отмеченных номеров (spots).
    pub max_spots: u32,
    /// Максимальная ставка за один раунд.
    pub max_stake: Stake,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            max_spots: 10,
            max_stake: 1000,
        }
    }
}

/// Правила дома.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HouseSettings {
    /// Сколько номеров дом вытягивает за раунд.
    pub draw_count: u32,
    /// Минимум совпадений для выплаты. Ниже порога выплата всегда 0,
    /// даже если в таблице выплат стоит ненулевой множитель.
    pub payout_count: u32,
}

impl Default for HouseSettings {
    fn default() -> Self {
        Self {
            draw_count: 20,
            payout_count: 5,
        }
    }
}

/// Полный набор параметров игры. Собирается один раз на сессию и дальше
/// только читается.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardSettings,
    pub player: PlayerSettings,
    pub house: HouseSettings,
}

impl GameConfig {
    pub fn new(board: BoardSettings, player: PlayerSettings, house: HouseSettings) -> Self {
        Self {
            board,
            player,
            house,
        }
    }

    /// Структурная проверка конфига. Вызывается при создании сессии,
    /// до первого раунда.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.min_number >= self.board.max_number {
            return Err(ConfigError::InvalidBoardRange {
                min: self.board.min_number,
                max: self.board.max_number,
            });
        }
        if self.player.max_spots == 0 {
            return Err(ConfigError::InvalidMaxSpots(self.player.max_spots));
        }
        if self.player.max_stake <= 0 {
            return Err(ConfigError::InvalidMaxStake(self.player.max_stake));
        }
        if self.house.draw_count == 0 {
            return Err(ConfigError::InvalidDrawCount(self.house.draw_count));
        }
        self.check_draw_fits_board()
    }

    /// draw_count <= размер поля. Отдельно, потому что движок раунда
    /// перепроверяет это перед каждым тиражом.
    pub fn check_draw_fits_board(&self) -> Result<(), ConfigError> {
        let board_size = self.board.size();
        if u128::from(self.house.draw_count) > board_size {
            return Err(ConfigError::InsufficientBoardRange {
                draw_count: u64::from(self.house.draw_count),
                board_size,
            });
        }
        Ok(())
    }
}
