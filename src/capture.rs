// Loading captured MT19937 output, cloning the generator from it and checking
// the clone against the rest of the capture.
//
// A capture is the text form of a debug dump: each output word is written as
// its 4 little-endian bytes in hex, with no separators. The first N words are
// enough to rebuild the whole state, since every output is a tempered state
// word and we can untemper it. Anything after that is a free check that we
// really are looking at a contiguous MT19937 stream.
use crate::{mt19937::N, untemper, Mt19937};

use rand_core::RngCore;
use thiserror::Error;

/// Number of words the slot machine writes to its debug dump.
pub const DEBUG_DUMP_WORDS: usize = 800;

const HEX_CHARS_PER_WORD: usize = 8;

#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("invalid hex in capture: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("capture has {len} hex characters, which is not a whole number of words")]
    TruncatedWord { len: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("capture has {len} words, at least {min} are needed to recover the state", min = N)]
    InputTooShort { len: usize },

    #[error("debug input doesn't match at offset {offset}: expected {expected:#010x}, generated {actual:#010x}")]
    ValidationMismatch {
        offset: usize,
        expected: u32,
        actual: u32,
    },

    #[error("capture has {available} words after the state, {required} are required for validation")]
    InsufficientValidation { available: usize, required: usize },
}

/// How much evidence a recovery needs before it is trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Minimum number of captured words past the first `N`. With the default
    /// of zero a capture of exactly `N` words is accepted unchecked.
    pub min_held_out: usize,
}

impl ValidationPolicy {
    pub fn strict(min_held_out: usize) -> Self {
        Self { min_held_out }
    }
}

pub fn decode_capture(text: &str) -> Result<Vec<u32>, DecodeError> {
    let text = text.trim_end();
    if text.len() % HEX_CHARS_PER_WORD != 0 {
        return Err(DecodeError::TruncatedWord { len: text.len() });
    }
    let bytes = hex::decode(text)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

pub fn encode_capture(words: &[u32]) -> String {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    hex::encode(bytes)
}

/// Dump `n_words` outputs of `rng` as raw bytes, the way the slot machine's
/// debug endpoint does.
pub fn dump_capture<R: RngCore + ?Sized>(rng: &mut R, n_words: usize) -> Vec<u8> {
    let mut dump = vec![0u8; n_words * std::mem::size_of::<u32>()];
    rng.fill_bytes(&mut dump);
    dump
}

/// Rebuild a generator from the first `N` words of `captured`.
///
/// The returned generator is positioned just past those `N` outputs, so its
/// next call twists and produces the word that followed them in the capture.
pub fn load_and_recover(captured: &[u32]) -> Result<Mt19937, RecoveryError> {
    if captured.len() < N {
        return Err(RecoveryError::InputTooShort {
            len: captured.len(),
        });
    }
    let state: [u32; N] = std::array::from_fn(|i| untemper(captured[i]));
    log::debug!("recovered state from the first {N} of {} words", captured.len());
    Ok(Mt19937::from_state(state))
}

/// Check that `rng` reproduces `held_out`, the words that were captured at
/// `start_offset` onwards.
pub fn validate(
    rng: &mut Mt19937,
    held_out: &[u32],
    start_offset: usize,
) -> Result<(), RecoveryError> {
    for (i, &expected) in held_out.iter().enumerate() {
        let actual = rng.generate();
        if actual != expected {
            return Err(RecoveryError::ValidationMismatch {
                offset: start_offset + i,
                expected,
                actual,
            });
        }
    }
    log::debug!("validated {} held-out words", held_out.len());
    Ok(())
}

/// Recover a generator from `captured` and check it against every word past
/// the first `N`. On success the generator is positioned right after the
/// last captured word.
pub fn clone_from_capture(
    captured: &[u32],
    policy: ValidationPolicy,
) -> Result<Mt19937, RecoveryError> {
    let mut rng = load_and_recover(captured)?;
    let held_out = &captured[N..];
    if held_out.len() < policy.min_held_out {
        return Err(RecoveryError::InsufficientValidation {
            available: held_out.len(),
            required: policy.min_held_out,
        });
    }
    if held_out.is_empty() {
        log::warn!("no words past the first {N}, accepting recovered state unchecked");
    }
    validate(&mut rng, held_out, N)?;
    Ok(rng)
}
