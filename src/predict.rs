// Predicting slot machine spins from a cloned generator.
//
// The machine spins three reels per play, and each reel takes the low byte of
// one generator output. Once the generator is cloned we can run it ahead and
// list exactly which future spins will pay out.
use crate::{Mt19937, Symbol};

pub const REELS: usize = 3;
pub const DEFAULT_TARGET_WINS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    /// 1-based position of the spin in the predicted stream.
    pub number: usize,
    pub symbols: [Symbol; REELS],
}

impl Spin {
    pub fn winning_symbol(&self) -> Option<Symbol> {
        let first = self.symbols[0];
        self.symbols.iter().all(|&s| s == first).then_some(first)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub spin: usize,
    pub symbol: Symbol,
}

/// Endless iterator over the spins produced by `rng`. Every spin advances the
/// generator, so the sequence can't be replayed without a fresh clone.
pub struct Spins<'a> {
    rng: &'a mut Mt19937,
    count: usize,
}

impl<'a> Spins<'a> {
    pub fn new(rng: &'a mut Mt19937) -> Self {
        Self { rng, count: 0 }
    }
}

impl Iterator for Spins<'_> {
    type Item = Spin;

    fn next(&mut self) -> Option<Self::Item> {
        self.count += 1;
        let symbols = std::array::from_fn(|_| Symbol::from_byte(self.rng.generate() as u8));
        Some(Spin {
            number: self.count,
            symbols,
        })
    }
}

/// Find the next `target_count` winning spins.
pub fn find_wins(rng: &mut Mt19937, target_count: usize) -> Vec<Win> {
    Spins::new(rng)
        .filter_map(|spin| {
            spin.winning_symbol().map(|symbol| Win {
                spin: spin.number,
                symbol,
            })
        })
        .take(target_count)
        .collect()
}
