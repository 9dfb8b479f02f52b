use serde::{Deserialize, Serialize};

use crate::domain::BoardNumber;

/// Итог одного раунда: тираж дома, совпадения и выплата.
/// Создаётся заново на каждый раунд и после этого не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundResult {
    /// Номера дома, по возрастанию.
    pub draw: Vec<BoardNumber>,
    /// Совпавшие номера, по возрастанию.
    pub matches: Vec<BoardNumber>,
    pub match_count: u32,
    pub payout: f64,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        self.payout > 0.0
    }
}
