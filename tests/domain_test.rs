//! Интеграционные тесты для доменной модели (crate::domain).

use keno_engine::domain::*;
use keno_engine::engine::{ConfigError, Session};

/// Значения по умолчанию — классический кено 20 из 80.
#[test]
fn default_config_values() {
    let cfg = GameConfig::default();

    assert_eq!(cfg.board.min_number, 1);
    assert_eq!(cfg.board.max_number, 80);
    assert_eq!(cfg.board.size(), 80);
    assert_eq!(cfg.player.max_spots, 10);
    assert_eq!(cfg.player.max_stake, 1000);
    assert_eq!(cfg.house.draw_count, 20);
    assert_eq!(cfg.house.payout_count, 5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn board_contains_is_inclusive() {
    let b = BoardSettings::default();
    assert!(b.contains(1) && b.contains(80));
    assert!(!b.contains(0) && !b.contains(81));
    assert_eq!(b.size(), 80);
    assert_eq!(b.range(), 1..=80);
}

#[test]
fn inverted_or_empty_board_rejected() {
    let mut cfg = GameConfig::default();
    cfg.board = BoardSettings {
        min_number: 10,
        max_number: 10,
    };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidBoardRange { min: 10, max: 10 })
    );

    cfg.board = BoardSettings {
        min_number: 50,
        max_number: 1,
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidBoardRange { .. })));
}

#[test]
fn zero_limits_rejected() {
    let mut cfg = GameConfig::default();
    cfg.player.max_spots = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidMaxSpots(0)));

    let mut cfg = GameConfig::default();
    cfg.player.max_stake = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidMaxStake(0)));

    let mut cfg = GameConfig::default();
    cfg.house.draw_count = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidDrawCount(0)));
}

#[test]
fn draw_count_must_fit_board() {
    let mut cfg = GameConfig::default();
    cfg.board = BoardSettings {
        min_number: 1,
        max_number: 10,
    };
    cfg.house.draw_count = 10;
    assert!(cfg.validate().is_ok());

    cfg.house.draw_count = 11;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InsufficientBoardRange {
            draw_count: 11,
            board_size: 10
        })
    );
}

#[test]
fn board_span_handles_full_i64_range() {
    assert_eq!(board_span(i64::MIN, i64::MAX), 1u128 << 64);
    assert_eq!(board_span(-5, 5), 11);
    assert_eq!(board_span(7, 7), 1);
    assert_eq!(board_span(8, 7), 0);
}

/// Поле на весь i64: размер не переполняется, сессия играет раунды.
#[test]
fn extreme_board_validates_and_plays() {
    let mut cfg = GameConfig::default();
    cfg.board = BoardSettings {
        min_number: i64::MIN,
        max_number: i64::MAX,
    };
    assert_eq!(cfg.board.size(), 1u128 << 64);
    assert!(cfg.validate().is_ok());

    let ticket = Ticket::new(3, 1, 2, vec![i64::MIN, 0, i64::MAX]);
    let mut session = Session::new(ticket, cfg, PayoutTable::standard(), Some(1))
        .expect("extreme board must be accepted");

    for _ in 0..2 {
        let round = session.play_round().unwrap();
        assert_eq!(round.draw.len(), 20);
        assert!(round.draw.windows(2).all(|w| w[0] < w[1]), "ascending and distinct");
    }
}

/// Частичный конфиг дополняется значениями по умолчанию.
#[test]
fn partial_config_deserializes_with_defaults() {
    let cfg: GameConfig = serde_json::from_str(r#"{ "house": { "draw_count": 15 } }"#).unwrap();

    assert_eq!(cfg.house.draw_count, 15);
    assert_eq!(cfg.house.payout_count, 5);
    assert_eq!(cfg.board, BoardSettings::default());
    assert_eq!(cfg.player, PlayerSettings::default());
}

#[test]
fn standard_paytable_matches_default_rate() {
    let t = PayoutTable::standard();

    for m in 0..=4 {
        assert_eq!(t.multiplier(m), 0.0);
    }
    assert_eq!(t.multiplier(5), 3.0);
    assert_eq!(t.multiplier(6), 15.0);
    assert_eq!(t.multiplier(7), 100.0);
    assert_eq!(t.multiplier(8), 1_000.0);
    assert_eq!(t.multiplier(9), 25_000.0);
    assert_eq!(t.multiplier(10), 2_500_000.0);
    // нет записи — 0
    assert_eq!(t.multiplier(11), 0.0);
    assert_eq!(t.len(), 11);
    assert!(t.validate().is_ok());
}

#[test]
fn paytable_presets() {
    assert_eq!(PayoutTable::preset("default"), Some(PayoutTable::standard()));
    assert!(PayoutTable::preset("jackpot-only").is_none());
    assert_eq!(PayoutTable::preset_names(), &["default"]);
}

#[test]
fn paytable_rejects_negative_and_non_finite() {
    let t = PayoutTable::from_pairs([(3, -0.5)]);
    assert!(matches!(
        t.validate(),
        Err(ConfigError::InvalidMultiplier { matches: 3, .. })
    ));

    let t = PayoutTable::from_pairs([(4, f64::NAN)]);
    assert!(t.validate().is_err());

    let t = PayoutTable::from_pairs([(4, f64::INFINITY)]);
    assert!(t.validate().is_err());

    assert!(PayoutTable::default().validate().is_ok());
    assert!(PayoutTable::default().is_empty());
}

#[test]
fn paytable_deserializes_from_plain_map() {
    let t: PayoutTable = serde_json::from_str(r#"{ "5": 3.0, "6": 15.0 }"#).unwrap();
    assert_eq!(t, PayoutTable::from_pairs([(5, 3.0), (6, 15.0)]));
    assert_eq!(t.iter().collect::<Vec<_>>(), vec![(5, 3.0), (6, 15.0)]);
}

#[test]
fn ticket_from_input_keeps_fields() {
    let input = TicketInput {
        spots: 2,
        stake: 10,
        games: 3,
        numbers: vec![42, 7],
    };
    let t = Ticket::from(input);

    assert_eq!(t, Ticket::new(2, 10, 3, vec![42, 7]));
    assert_eq!(t.rounds_to_play(), 3);
    assert_eq!(Ticket::new(1, 1, -4, vec![1]).rounds_to_play(), 0);
}

#[test]
fn summary_from_totals_computes_earnings() {
    let totals = SessionTotals {
        rounds_played: 4,
        wins: 1,
        total_stake: 400.0,
        total_payout: 150.0,
    };
    let s = SessionSummary::from(&totals);

    assert_eq!(s.rounds, 4);
    assert_eq!(s.wins, 1);
    assert_eq!(s.earnings, -250.0);
}

#[test]
fn round_result_win_flag() {
    let r = RoundResult {
        draw: vec![1, 2, 3],
        matches: vec![],
        match_count: 0,
        payout: 0.0,
    };
    assert!(!r.is_win());

    let r = RoundResult { payout: 0.5, ..r };
    assert!(r.is_win());
}
