use serde::{Deserialize, Serialize};

/// Накопленные итоги сессии. Меняются только сессией; `reset` обнуляет всё.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionTotals {
    pub rounds_played: u64,
    pub wins: u64,
    pub total_stake: f64,
    pub total_payout: f64,
}

impl SessionTotals {
    pub fn earnings(&self) -> f64 {
        self.total_payout - self.total_stake
    }
}

/// Сводка по сессии для слоя представления.
/// Форматирование валюты делает вызывающий код (`api::format`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub rounds: u64,
    pub wins: u64,
    pub stake: f64,
    pub payout: f64,
    /// payout - stake, может быть отрицательным.
    pub earnings: f64,
}

impl From<&SessionTotals> for SessionSummary {
    fn from(t: &SessionTotals) -> Self {
        Self {
            rounds: t.rounds_played,
            wins: t.wins,
            stake: t.total_stake,
            payout: t.total_payout,
            earnings: t.earnings(),
        }
    }
}
