use std::collections::BTreeSet;

use crate::domain::config::GameConfig;
use crate::domain::ticket::Ticket;
use crate::domain::BoardNumber;
use crate::engine::errors::ValidationError;

/// Проверка билета против правил игры.
///
/// Порядок проверок фиксированный: сначала поля по отдельности,
/// потом перекрёстные (spots vs numbers, лимиты конфига), потом сами номера.
/// При успехе номера сортируются по возрастанию. Повторная проверка уже
/// валидного билета возвращает тот же билет.
pub fn validate_ticket(mut ticket: Ticket, config: &GameConfig) -> Result<Ticket, ValidationError> {
    if ticket.spots < 1 {
        return Err(ValidationError::InvalidSpots(ticket.spots));
    }
    if ticket.stake < 1 {
        return Err(ValidationError::InvalidStake(ticket.stake));
    }
    if ticket.rounds < 1 {
        return Err(ValidationError::InvalidRounds(ticket.rounds));
    }
    if ticket.numbers.is_empty() {
        return Err(ValidationError::EmptyNumbers);
    }

    // Только количество; дубликаты ловит отдельная проверка ниже.
    if usize::try_from(ticket.spots).ok() != Some(ticket.numbers.len()) {
        return Err(ValidationError::SpotsNumbersMismatch {
            spots: ticket.spots,
            numbers: ticket.numbers.len(),
        });
    }

    if ticket.spots > i64::from(config.player.max_spots) {
        return Err(ValidationError::TooManySpots {
            spots: ticket.spots,
            max_spots: config.player.max_spots,
        });
    }
    if ticket.stake > config.player.max_stake {
        return Err(ValidationError::StakeTooLarge {
            stake: ticket.stake,
            max_stake: config.player.max_stake,
        });
    }

    let duplicates = find_duplicates(&ticket.numbers);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateNumbers { duplicates });
    }

    let out_of_range: Vec<BoardNumber> = ticket
        .numbers
        .iter()
        .copied()
        .filter(|n| !config.board.contains(*n))
        .collect();
    if !out_of_range.is_empty() {
        return Err(ValidationError::NumberOutOfRange {
            numbers: out_of_range,
            min: config.board.min_number,
            max: config.board.max_number,
        });
    }

    ticket.numbers.sort_unstable();
    Ok(ticket)
}

/// Номера, встречающиеся больше одного раза (каждый один раз, по возрастанию).
fn find_duplicates(numbers: &[BoardNumber]) -> Vec<BoardNumber> {
    let mut seen = BTreeSet::new();
    let mut repeated = BTreeSet::new();
    for &n in numbers {
        if !seen.insert(n) {
            repeated.insert(n);
        }
    }
    repeated.into_iter().collect()
}
