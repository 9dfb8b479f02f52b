//! Консольное представление: валюта, строки слипа и итогов.
//! Движок сам ничего не форматирует, только этот модуль.

use crate::domain::round::RoundResult;
use crate::domain::ticket::Ticket;
use crate::domain::totals::SessionSummary;

/// Символ валюты ставок.
pub const CURRENCY: &str = "£";

/// Ширина колонки с названием поля.
pub const LABEL_WIDTH: usize = 10;

/// `1234.5` -> `£1,234.50`, `-5.0` -> `-£5.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        CURRENCY,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Строка "Label     value" с выравниванием по ширине метки.
pub fn render_line(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

/// Поля слипа для печати. Валюта только у ставки.
pub fn slip_lines(ticket: &Ticket) -> Vec<(String, String)> {
    vec![
        ("Spots".to_string(), ticket.spots.to_string()),
        ("Stake".to_string(), format_currency(ticket.stake as f64)),
        ("Games".to_string(), ticket.rounds.to_string()),
        ("Numbers".to_string(), format!("{:?}", ticket.numbers)),
    ]
}

/// Итоги сессии для печати. Валюта у stake / payout / earnings.
pub fn summary_lines(summary: &SessionSummary) -> Vec<(String, String)> {
    vec![
        ("Rounds".to_string(), summary.rounds.to_string()),
        ("Wins".to_string(), summary.wins.to_string()),
        ("Stake".to_string(), format_currency(summary.stake)),
        ("Payout".to_string(), format_currency(summary.payout)),
        ("Earnings".to_string(), format_currency(summary.earnings)),
    ]
}

/// Короткая строка для режима `--details`.
pub fn round_line(index: u64, result: &RoundResult) -> String {
    format!(
        "Game {index}: draw={:?} matches={:?} ({}) payout={}",
        result.draw,
        result.matches,
        result.match_count,
        format_currency(result.payout)
    )
}
