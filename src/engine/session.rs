use tracing::{info, warn};

use crate::domain::config::GameConfig;
use crate::domain::paytable::PayoutTable;
use crate::domain::round::RoundResult;
use crate::domain::ticket::Ticket;
use crate::domain::totals::{SessionSummary, SessionTotals};
use crate::engine::errors::EngineError;
use crate::engine::round::RoundEngine;
use crate::engine::validation::validate_ticket;
use crate::engine::RandomSource;
use crate::infra::rng::{entropy_seed, DeterministicRng};

/// Сессия: серия раундов по одному билету с накопленными итогами.
///
/// Владеет билетом, конфигом, таблицей выплат и своим RNG. RNG — единственное
/// изменяемое состояние между раундами; делить его между сессиями нельзя,
/// порядок тиражей зависит от порядка вызовов.
#[derive(Debug)]
pub struct Session<R: RandomSource = DeterministicRng> {
    ticket: Ticket,
    config: GameConfig,
    paytable: PayoutTable,
    rng: R,
    /// Seed, из которого инициализирован текущий поток RNG (если известен).
    seed: Option<u64>,
    totals: SessionTotals,
    /// История раундов; `None`, если хранение не включено.
    history: Option<Vec<RoundResult>>,
}

impl Session<DeterministicRng> {
    /// Сессия на детерминированном RNG.
    ///
    /// Без явного seed он берётся из энтропии ОС и сохраняется, чтобы
    /// серию можно было воспроизвести (`Session::seed`).
    pub fn new(
        ticket: Ticket,
        config: GameConfig,
        paytable: PayoutTable,
        seed: Option<u64>,
    ) -> Result<Self, EngineError> {
        let effective_seed = seed.unwrap_or_else(entropy_seed);
        let mut session = Self::with_rng(
            ticket,
            config,
            paytable,
            DeterministicRng::from_seed(effective_seed),
        )?;
        session.seed = Some(effective_seed);
        info!(seed = effective_seed, explicit = seed.is_some(), "keno session seeded");
        Ok(session)
    }
}

impl<R: RandomSource> Session<R> {
    /// Сборка сессии с произвольным источником случайности.
    ///
    /// Конфиг и таблица выплат проверяются до билета: ошибка конфигурации
    /// должна всплыть раньше, чем будет сыгран хоть один раунд.
    pub fn with_rng(
        ticket: Ticket,
        config: GameConfig,
        paytable: PayoutTable,
        rng: R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        paytable.validate()?;

        let ticket = validate_ticket(ticket, &config).map_err(|err| {
            warn!(error = %err, "keno ticket rejected");
            err
        })?;

        info!(
            spots = ticket.spots,
            stake = ticket.stake,
            rounds = ticket.rounds,
            numbers = ?ticket.numbers,
            "keno session created"
        );

        Ok(Self {
            ticket,
            config,
            paytable,
            rng,
            seed: None,
            totals: SessionTotals::default(),
            history: None,
        })
    }

    /// Включить хранение истории раундов.
    pub fn keep_history(mut self) -> Self {
        self.history.get_or_insert_with(Vec::new);
        self
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn paytable(&self) -> &PayoutTable {
        &self.paytable
    }

    pub fn totals(&self) -> &SessionTotals {
        &self.totals
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Сыгранные раунды (пусто, если история не хранится).
    pub fn history(&self) -> &[RoundResult] {
        self.history.as_deref().unwrap_or(&[])
    }

    /// Один раунд с учётом в итогах.
    ///
    /// Раунд либо проходит целиком (тираж, совпадения, выплата), либо
    /// не учитывается вовсе.
    pub fn play_round(&mut self) -> Result<RoundResult, EngineError> {
        let engine = RoundEngine::new(&self.config, &self.paytable);
        let result = engine.play_round(&self.ticket, &mut self.rng)?;

        self.totals.rounds_played += 1;
        self.totals.total_stake += self.ticket.stake as f64;
        if result.is_win() {
            self.totals.wins += 1;
            self.totals.total_payout += result.payout;
        }

        if let Some(history) = self.history.as_mut() {
            history.push(result.clone());
        }

        Ok(result)
    }

    /// Сыграть все `ticket.rounds` раундов.
    pub fn play(&mut self) -> Result<SessionTotals, EngineError> {
        for _ in 0..self.ticket.rounds_to_play() {
            self.play_round()?;
        }

        info!(
            rounds = self.totals.rounds_played,
            wins = self.totals.wins,
            stake = self.totals.total_stake,
            payout = self.totals.total_payout,
            "keno session finished"
        );

        Ok(self.totals)
    }

    pub fn summarize(&self) -> SessionSummary {
        SessionSummary::from(&self.totals)
    }

    /// Обнулить итоги (и историю). Билет, конфиг, таблица и RNG не трогаются.
    pub fn reset(&mut self) {
        self.totals = SessionTotals::default();
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }

    /// Переинициализировать RNG.
    ///
    /// Явный seed используется как есть; без него новый seed берётся из
    /// текущего потока RNG. Возвращает фактический seed для воспроизведения.
    pub fn reseed(&mut self, seed: Option<u64>) -> u64 {
        let effective = match seed {
            Some(s) => s,
            None => self.rng.next_seed(),
        };
        self.rng.reseed(effective);
        self.seed = Some(effective);

        info!(seed = effective, explicit = seed.is_some(), "keno session reseeded");
        effective
    }
}
