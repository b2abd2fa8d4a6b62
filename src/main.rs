mod args;

use std::{io::Write, path::Path};

use anyhow::Context;
use rand::Rng;

use args::Command;
use mtclone::{
    clone_from_capture, decode_capture, dump_capture, expected_spin_payout, find_wins, Mt19937,
    Symbol, ValidationPolicy, STATE_SIZE,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let arg = args::parse_args();
    match arg.command {
        Command::Predict {
            capture,
            wins,
            min_held_out,
        } => predict(&capture, wins, min_held_out),
        Command::Dump { words, output } => dump(words, output.as_deref()),
        Command::Odds => {
            odds();
            Ok(())
        }
    }
}

fn predict(capture: &Path, n_wins: usize, min_held_out: usize) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(capture)
        .with_context(|| format!("could not read capture {}", capture.display()))?;
    let words = decode_capture(&text)
        .with_context(|| format!("could not decode capture {}", capture.display()))?;
    log::info!("read {} words from {}", words.len(), capture.display());

    let mut rng = clone_from_capture(&words, ValidationPolicy::strict(min_held_out))?;

    println!("RNG cloned!");
    println!("All in on the following spins:");
    for win in find_wins(&mut rng, n_wins) {
        println!("Spin {}: {}", win.spin, win.symbol);
    }
    Ok(())
}

fn dump(n_words: usize, output: Option<&Path>) -> anyhow::Result<()> {
    let mut os_rng = rand::thread_rng();
    let state: [u32; STATE_SIZE] = std::array::from_fn(|_| os_rng.gen());
    let mut rng = Mt19937::from_state(state);
    let capture = hex::encode(dump_capture(&mut rng, n_words));

    match output {
        Some(path) => {
            std::fs::write(path, capture + "\n")
                .with_context(|| format!("could not write capture {}", path.display()))?;
            log::info!("wrote {n_words} words to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{capture}")?;
        }
    }
    Ok(())
}

fn odds() {
    println!("{:<14}{:>6}{:>8}{:>16}{:>14}", "Symbol", "Odds", "Payout", "Probability", "Avg payout");
    for symbol in Symbol::ALL {
        println!(
            "{:<14}{:>6}{:>8}{:>16.10}{:>14.10}",
            symbol.name(),
            symbol.odds(),
            symbol.payout(),
            symbol.win_probability(),
            symbol.expected_payout(),
        );
    }
    println!("Avg payout: {}", expected_spin_payout());
}
