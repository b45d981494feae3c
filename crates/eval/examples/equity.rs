// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0
//
// Compute exact showdown equities, e.g:
//
// ```bash
// $ cargo r --release --example equity -- "A♠ K♢" "6♢ 6♣" --board "T♣ A♡ 9♠"
// ```
use clap::Parser;
use std::time::Instant;

use showdown_eval::{equity, equity_parallel};

#[derive(Debug, Parser)]
struct Cli {
    /// Active holdings, two cards each, e.g. "A♠ K♢".
    #[clap(required = true, num_args = 2..)]
    holdings: Vec<String>,
    /// Board cards, 0, 3, 4, or 5.
    #[clap(long, default_value = "")]
    board: String,
    /// Mucked holdings excluded from the deck, two cards each.
    #[clap(long)]
    mucked: Vec<String>,
    /// Split the enumeration across all cores.
    #[clap(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let active = cli.holdings.iter().map(String::as_str).collect::<Vec<_>>();
    let mucked = cli.mucked.iter().map(String::as_str).collect::<Vec<_>>();

    let now = Instant::now();
    let equities = if cli.parallel {
        equity_parallel(&active, &mucked, &cli.board)?
    } else {
        equity(&active, &mucked, &cli.board)?
    };
    let elapsed = now.elapsed().as_secs_f64();

    for (holding, eq) in active.iter().zip(&equities) {
        println!("{holding}   {:6.2}%", eq * 100.0);
    }
    println!("Elapsed: {elapsed:.3}s");

    Ok(())
}
