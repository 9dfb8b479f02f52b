use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::config::GameConfig;
use crate::domain::paytable::PayoutTable;
use crate::domain::round::RoundResult;
use crate::domain::ticket::Ticket;
use crate::domain::{BoardNumber, Stake};
use crate::engine::errors::{ConfigError, EngineError};
use crate::engine::payout::compute_payout;
use crate::engine::RandomSource;

/// Движок одного раунда.
///
/// Своего изменяемого состояния нет: только ссылки на конфиг и таблицу
/// выплат. Всё изменяемое (RNG) передаётся в каждый вызов, поэтому раунд —
/// чистая функция от (конфиг, таблица, билет, состояние RNG).
#[derive(Clone, Copy, Debug)]
pub struct RoundEngine<'a> {
    config: &'a GameConfig,
    paytable: &'a PayoutTable,
}

impl<'a> RoundEngine<'a> {
    pub fn new(config: &'a GameConfig, paytable: &'a PayoutTable) -> Self {
        Self { config, paytable }
    }

    /// Тираж дома: `draw_count` различных номеров поля без возвращения,
    /// по возрастанию. Никогда не обрезает тираж молча.
    pub fn draw_house_numbers<R: RandomSource>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<BoardNumber>, ConfigError> {
        self.config.check_draw_fits_board()?;

        let mut draw = rng.sample_without_replacement(
            self.config.board.range(),
            self.config.house.draw_count as usize,
        )?;
        draw.sort_unstable();
        Ok(draw)
    }

    /// Пересечение тиража и номеров билета, по возрастанию.
    pub fn find_matches(draw: &[BoardNumber], numbers: &[BoardNumber]) -> Vec<BoardNumber> {
        let drawn: BTreeSet<BoardNumber> = draw.iter().copied().collect();
        let picked: BTreeSet<BoardNumber> = numbers.iter().copied().collect();
        drawn.intersection(&picked).copied().collect()
    }

    pub fn compute_payout(&self, match_count: u32, stake: Stake) -> f64 {
        compute_payout(match_count, stake, &self.config.house, self.paytable)
    }

    /// Полный раунд: тираж -> совпадения -> выплата.
    pub fn play_round<R: RandomSource>(
        &self,
        ticket: &Ticket,
        rng: &mut R,
    ) -> Result<RoundResult, EngineError> {
        let draw = self.draw_house_numbers(rng)?;
        let matches = Self::find_matches(&draw, &ticket.numbers);
        let match_count = matches.len() as u32;
        let payout = self.compute_payout(match_count, ticket.stake);

        debug!(?draw, ?matches, match_count, payout, "keno round played");

        Ok(RoundResult {
            draw,
            matches,
            match_count,
            payout,
        })
    }
}
