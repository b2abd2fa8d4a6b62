//! MT19937 pseudo-random number generator

use rand_core::{impls, RngCore};

pub const N: usize = 624;
const M: usize = 397;
const UMASK: u32 = 0x80000000;
const LMASK: u32 = 0x7fffffff;
const A: u32 = 0x9908b0df;
pub(crate) const U: u32 = 11;
pub(crate) const D: u32 = 0xffffffff;
pub(crate) const S: u32 = 7;
pub(crate) const B: u32 = 0x9d2c5680;
pub(crate) const T: u32 = 15;
pub(crate) const C: u32 = 0xefc60000;
pub(crate) const L: u32 = 18;

/// A 32-bit Mersenne Twister whose state can be set directly.
///
/// `index` is the position of the next state word to temper and emit. When
/// it reaches `N` the whole state is twisted before the next output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Build a generator that twists `state` before producing its first
    /// output. This is the position a generator is in after the last of `N`
    /// outputs has been read from the state.
    pub fn from_state(state: [u32; N]) -> Self {
        Self { state, index: N }
    }

    /// Build a generator that emits `temper(state[index])` next. An index
    /// past `N` is treated as `N`.
    pub fn from_state_at(state: [u32; N], index: usize) -> Self {
        Self {
            state,
            index: index.min(N),
        }
    }

    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generate(&mut self) -> u32 {
        if self.index >= N {
            twist(&mut self.state);
            self.index = 0;
        }
        let y = temper(self.state[self.index]);
        self.index += 1;
        y
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.generate()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Regenerate all `N` words of `state`.
///
/// This is one forward pass that overwrites `state[i]` as it goes. Reads of
/// `state[i + 1]` and `state[i + M]` wrap around and pick up words already
/// rewritten in this pass once `i` is near the end of the array.
pub fn twist(state: &mut [u32; N]) {
    for i in 0..N {
        let x = (state[i] & UMASK) | (state[(i + 1) % N] & LMASK);
        let mut x_a = x >> 1;
        if x & 1 == 1 {
            x_a ^= A;
        }
        state[i] = state[(i + M) % N] ^ x_a;
    }
}

pub fn temper(word: u32) -> u32 {
    let mut y = word ^ ((word >> U) & D);
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ (y >> L)
}

/// Reference `init_genrand` seeding, only used to reach published test
/// vectors.
#[cfg(test)]
pub(crate) fn seeded_state(mut seed: u32) -> [u32; N] {
    const F: u32 = 1812433253;
    let mut state = [0; N];
    state[0] = seed;
    for (i, state_element) in state.iter_mut().enumerate().skip(1) {
        seed = F.wrapping_mul(seed ^ (seed >> 30)).wrapping_add(i as u32);
        *state_element = seed;
    }
    state
}
