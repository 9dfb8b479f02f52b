use serde::{Deserialize, Serialize};

use crate::domain::{BoardNumber, Stake};

/// Сырые данные билета в том виде, как их отдаёт загрузчик (YAML/JSON).
///
/// Поддерживаются алиасы оригинального формата слипа:
/// `stake` / `bet` и `games` / `rounds`. Лишние ключи (например `$schema`)
/// игнорируются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketInput {
    pub spots: i64,
    #[serde(alias = "bet")]
    pub stake: Stake,
    #[serde(alias = "rounds")]
    pub games: i64,
    pub numbers: Vec<BoardNumber>,
}

/// Билет игрока.
///
/// Создаётся один раз из входных данных, валидируется один раз
/// (`engine::validation::validate_ticket`) и дальше только читается.
/// После валидации `numbers` отсортированы по возрастанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Заявленное количество отмеченных номеров.
    pub spots: i64,
    /// Ставка за один раунд.
    pub stake: Stake,
    /// Сколько раундов играть этим билетом.
    pub rounds: i64,
    /// Отмеченные номера.
    pub numbers: Vec<BoardNumber>,
}

impl Ticket {
    pub fn new(spots: i64, stake: Stake, rounds: i64, numbers: Vec<BoardNumber>) -> Self {
        Self {
            spots,
            stake,
            rounds,
            numbers,
        }
    }

    /// Количество раундов как счётчик цикла (0 для невалидного билета).
    pub fn rounds_to_play(&self) -> u64 {
        u64::try_from(self.rounds).unwrap_or(0)
    }
}

impl From<TicketInput> for Ticket {
    fn from(input: TicketInput) -> Self {
        Ticket::new(input.spots, input.stake, input.games, input.numbers)
    }
}
