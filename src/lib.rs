//! Симулятор кено.
//!
//! Игрок сдаёт билет (номера, ставка, число раундов), дом тянет номера,
//! движок считает совпадения и выплату по таблице, сессия копит итоги.
//!
//! Слои:
//! - `domain` – конфиг игры, таблица выплат, билет, итоги;
//! - `engine` – валидация, раунд, сессия;
//! - `infra` – RNG;
//! - `api` – загрузка слипа и консольное представление.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{GameConfig, PayoutTable, RoundResult, SessionSummary, SessionTotals, Ticket};
pub use engine::{EngineError, RandomSource, RoundEngine, Session};
