//! Доменная модель кено: конфиг игры, таблица выплат, билет, итоги раунда и сессии.

pub mod config;
pub mod paytable;
pub mod round;
pub mod ticket;
pub mod totals;

/// Номер на игровом поле.
pub type BoardNumber = i64;
/// Ставка в целых единицах валюты. Знаковая, чтобы валидация могла
/// сообщить о неположительной ставке.
pub type Stake = i64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Ticket и т.п.
pub use config::*;
pub use paytable::*;
pub use round::*;
pub use ticket::*;
pub use totals::*;
