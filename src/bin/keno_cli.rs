// src/bin/keno_cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keno_engine::api::{self, render_line, round_line, slip_lines, summary_lines};
use keno_engine::domain::GameConfig;
use keno_engine::engine::Session;

/// Сдать слип и сыграть раунды кено.
#[derive(Parser, Debug)]
#[command(name = "keno_cli", about = "Keno round simulator")]
struct Args {
    /// Файл слипа (YAML или JSON)
    #[arg(long, default_value = "keno-slip.yml")]
    slip: PathBuf,

    /// Файл с правилами игры; без него — правила по умолчанию
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Тариф выплат
    #[arg(long, default_value = "default")]
    payout_rate: String,

    /// Seed RNG, чтобы повторить конкретную серию
    #[arg(long)]
    seed: Option<u64>,

    /// Печатать каждый раунд
    #[arg(long)]
    details: bool,

    /// Итоги в JSON вместо таблицы
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.rules {
        Some(path) => api::load_rules(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let paytable = api::payout_rate(&args.payout_rate)?;
    let ticket = api::load_ticket(&args.slip)
        .with_context(|| format!("loading slip from {}", args.slip.display()))?;

    let mut session = Session::new(ticket, config, paytable, args.seed)
        .map_err(api::ApiError::from)?;

    if !args.json {
        print_header("Slip");
        for (label, value) in slip_lines(session.ticket()) {
            println!("{}", render_line(&label, &value));
        }
    }

    for index in 0..session.ticket().rounds_to_play() {
        let result = session.play_round().map_err(api::ApiError::from)?;
        if args.details && !args.json {
            println!("{}", round_line(index, &result));
        }
    }

    let summary = session.summarize();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_header("Results");
    for (label, value) in summary_lines(&summary) {
        let line = render_line(&label, &value);
        // Earnings жирным, чтобы сразу бросались в глаза.
        if label == "Earnings" {
            println!("\x1b[1m{line}\x1b[0m");
        } else {
            println!("{line}");
        }
    }

    if let Some(seed) = session.seed() {
        println!("\n(seed {seed}; pass --seed {seed} to replay)");
    }

    Ok(())
}

fn print_header(title: &str) {
    println!("\n{}\n{}\n{}", "-".repeat(8), title, "-".repeat(8));
}
