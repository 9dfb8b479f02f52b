use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keno_engine::api::{self, format_currency};
use keno_engine::domain::{GameConfig, Ticket};
use keno_engine::engine::Session;
use keno_engine::infra::RngSeed;

/// Пакетная симуляция: много независимых сессий одним билетом,
/// на выходе — эмпирический RTP.
#[derive(Parser, Debug)]
#[command(name = "keno_rtp_sim", about = "Estimate keno return-to-player")]
struct Args {
    /// Сколько сессий гонять
    #[arg(long, default_value_t = 1_000)]
    sessions: u64,

    /// Раундов в каждой сессии
    #[arg(long, default_value_t = 100)]
    rounds: i64,

    /// Ставка за раунд
    #[arg(long, default_value_t = 10)]
    stake: i64,

    /// Номера билета (через запятую)
    #[arg(long, value_delimiter = ',', default_values_t = [3, 11, 19, 27, 35, 43, 51, 59, 67, 75])]
    numbers: Vec<i64>,

    /// Мастер-seed; seed каждой сессии выводится из него
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Тариф выплат
    #[arg(long, default_value = "default")]
    payout_rate: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.sessions == 0 {
        bail!("--sessions must be at least 1");
    }

    let config = GameConfig::default();
    let paytable = api::payout_rate(&args.payout_rate)?;
    let master = RngSeed::from_u64(args.seed);

    println!(
        "keno_rtp_sim: {} сессий x {} раундов, {} spots, ставка {}",
        args.sessions,
        args.rounds,
        args.numbers.len(),
        format_currency(args.stake as f64)
    );

    // Статистика.
    let mut total_rounds: u64 = 0;
    let mut total_wins: u64 = 0;
    let mut total_stake: f64 = 0.0;
    let mut total_payout: f64 = 0.0;
    let mut best_session: f64 = f64::MIN;
    let mut winning_sessions: u64 = 0;

    for index in 0..args.sessions {
        let ticket = Ticket::new(
            args.numbers.len() as i64,
            args.stake,
            args.rounds,
            args.numbers.clone(),
        );
        let rng = master.derive(index).to_rng();

        let mut session = Session::with_rng(ticket, config.clone(), paytable.clone(), rng)?;
        let totals = session.play()?;

        total_rounds += totals.rounds_played;
        total_wins += totals.wins;
        total_stake += totals.total_stake;
        total_payout += totals.total_payout;

        let earnings = totals.earnings();
        best_session = best_session.max(earnings);
        if earnings > 0.0 {
            winning_sessions += 1;
        }
    }

    let rtp = if total_stake > 0.0 {
        total_payout / total_stake
    } else {
        0.0
    };
    let win_rate = total_wins as f64 / total_rounds.max(1) as f64;

    info!(master_seed = args.seed, rtp, win_rate, "simulation finished");

    println!();
    println!("================ RTP SIMULATION =================");
    println!("Rounds played     : {}", total_rounds);
    println!("Winning rounds    : {} ({:.4}%)", total_wins, win_rate * 100.0);
    println!("Total stake       : {}", format_currency(total_stake));
    println!("Total payout      : {}", format_currency(total_payout));
    println!("RTP               : {:.4}%", rtp * 100.0);
    println!(
        "Winning sessions  : {} / {}",
        winning_sessions, args.sessions
    );
    println!("Best session      : {}", format_currency(best_session));
    println!("Master seed       : {}", args.seed);

    Ok(())
}
