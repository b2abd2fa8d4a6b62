mod capture;
mod mt19937;
mod predict;
mod symbol;
mod untemper;

pub use capture::{
    clone_from_capture, decode_capture, dump_capture, encode_capture, load_and_recover, validate,
    DecodeError, RecoveryError, ValidationPolicy, DEBUG_DUMP_WORDS,
};
pub use mt19937::{temper, twist, Mt19937, N as STATE_SIZE};
pub use predict::{find_wins, Spin, Spins, Win, DEFAULT_TARGET_WINS, REELS};
pub use symbol::{expected_spin_payout, Symbol};
pub use untemper::untemper;
