use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mtclone::{DEBUG_DUMP_WORDS, DEFAULT_TARGET_WINS};

/// Clone an MT19937 generator from its captured output and predict winning
/// slot machine spins
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arg {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recover the generator from a capture and list upcoming winning spins
    Predict {
        /// Hex capture of little-endian 32-bit outputs
        capture: PathBuf,
        /// Number of winning spins to report
        #[arg(short, long, default_value_t = DEFAULT_TARGET_WINS)]
        wins: usize,
        /// Refuse to predict unless the capture has at least this many words
        /// past the recovered state to validate against
        #[arg(long, default_value_t = 0)]
        min_held_out: usize,
    },
    /// Write a capture from a generator with a random state
    Dump {
        /// Number of output words to capture
        #[arg(short, long, default_value_t = DEBUG_DUMP_WORDS)]
        words: usize,
        /// Output file, stdout if not given
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the payout table and the expected return of one spin
    Odds,
}

pub fn parse_args() -> Arg {
    Arg::parse()
}
