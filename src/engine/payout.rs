use crate::domain::config::HouseSettings;
use crate::domain::paytable::PayoutTable;
use crate::domain::Stake;

/// Выплата за раунд.
///
/// Ниже `house.payout_count` совпадений выплата всегда 0: порог сильнее
/// таблицы, ненулевая запись ниже порога никогда не срабатывает.
/// Иначе `stake * multiplier`, где отсутствующая запись = 0.
pub fn compute_payout(
    match_count: u32,
    stake: Stake,
    house: &HouseSettings,
    paytable: &PayoutTable,
) -> f64 {
    // Проигрыш — самый частый случай, проверяем первым.
    if match_count < house.payout_count {
        return 0.0;
    }
    stake as f64 * paytable.multiplier(match_count)
}
