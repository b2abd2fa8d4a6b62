// Slot machine reel symbols and their odds.
//
// Each reel draws one byte from the generator. The byte space is split into
// eight buckets of decreasing width, and rarer symbols pay out more.

const BYTE_VALUES: f64 = 256.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cherry,
    Bar,
    DoubleBar,
    TripleBar,
    Seven,
    MinorJackpot,
    MajorJackpot,
    GrandJackpot,
}

impl Symbol {
    pub const ALL: [Symbol; 8] = [
        Symbol::Cherry,
        Symbol::Bar,
        Symbol::DoubleBar,
        Symbol::TripleBar,
        Symbol::Seven,
        Symbol::MinorJackpot,
        Symbol::MajorJackpot,
        Symbol::GrandJackpot,
    ];

    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0..=127 => Symbol::Cherry,
            128..=191 => Symbol::Bar,
            192..=217 => Symbol::DoubleBar,
            218..=239 => Symbol::TripleBar,
            240..=248 => Symbol::Seven,
            249..=252 => Symbol::MinorJackpot,
            253..=254 => Symbol::MajorJackpot,
            255 => Symbol::GrandJackpot,
        }
    }

    /// Number of byte values that map to this symbol.
    pub fn odds(&self) -> u32 {
        match self {
            Symbol::Cherry => 128,
            Symbol::Bar => 64,
            Symbol::DoubleBar => 26,
            Symbol::TripleBar => 22,
            Symbol::Seven => 9,
            Symbol::MinorJackpot => 4,
            Symbol::MajorJackpot => 2,
            Symbol::GrandJackpot => 1,
        }
    }

    /// Multiple of the bet paid when all three reels show this symbol.
    pub fn payout(&self) -> usize {
        match self {
            Symbol::Cherry => 3,
            Symbol::Bar => 5,
            Symbol::DoubleBar => 10,
            Symbol::TripleBar => 15,
            Symbol::Seven => 20,
            Symbol::MinorJackpot => 25,
            Symbol::MajorJackpot => 50,
            Symbol::GrandJackpot => 100,
        }
    }

    /// Probability that a spin of three independent bytes lands three of
    /// this symbol.
    pub fn win_probability(&self) -> f64 {
        (self.odds() as f64 / BYTE_VALUES).powi(3)
    }

    pub fn expected_payout(&self) -> f64 {
        self.win_probability() * self.payout() as f64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Cherry => "Cherry",
            Symbol::Bar => "Bar",
            Symbol::DoubleBar => "DoubleBar",
            Symbol::TripleBar => "TripleBar",
            Symbol::Seven => "Seven",
            Symbol::MinorJackpot => "MinorJackpot",
            Symbol::MajorJackpot => "MajorJackpot",
            Symbol::GrandJackpot => "GrandJackpot",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected return of a single spin with a bet of 1.
pub fn expected_spin_payout() -> f64 {
    Symbol::ALL.iter().map(Symbol::expected_payout).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, Symbol::Cherry)]
    #[case(5, Symbol::Cherry)]
    #[case(127, Symbol::Cherry)]
    #[case(128, Symbol::Bar)]
    #[case(191, Symbol::Bar)]
    #[case(192, Symbol::DoubleBar)]
    #[case(200, Symbol::DoubleBar)]
    #[case(217, Symbol::DoubleBar)]
    #[case(218, Symbol::TripleBar)]
    #[case(239, Symbol::TripleBar)]
    #[case(240, Symbol::Seven)]
    #[case(248, Symbol::Seven)]
    #[case(249, Symbol::MinorJackpot)]
    #[case(252, Symbol::MinorJackpot)]
    #[case(253, Symbol::MajorJackpot)]
    #[case(254, Symbol::MajorJackpot)]
    #[case(255, Symbol::GrandJackpot)]
    fn from_byte_maps_bucket_boundaries(#[case] byte: u8, #[case] expected: Symbol) {
        assert_eq!(Symbol::from_byte(byte), expected);
    }

    #[test]
    fn buckets_partition_byte_range() {
        let mut counts = [0u32; 8];
        for byte in 0..=255u8 {
            let symbol = Symbol::from_byte(byte);
            assert_eq!(Symbol::from_byte(byte), symbol);
            let idx = Symbol::ALL.iter().position(|&s| s == symbol).unwrap();
            counts[idx] += 1;
        }

        for (symbol, count) in Symbol::ALL.iter().zip(counts) {
            assert_eq!(symbol.odds(), count, "{symbol}");
        }
        assert_eq!(counts.iter().sum::<u32>(), 256);
    }

    #[test]
    fn buckets_are_contiguous_in_symbol_order() {
        let symbols: Vec<Symbol> = (0..=255u8).map(Symbol::from_byte).collect();

        let mut seen = vec![symbols[0]];
        for pair in symbols.windows(2) {
            if pair[0] != pair[1] {
                seen.push(pair[1]);
            }
        }

        assert_eq!(seen, Symbol::ALL.to_vec());
    }

    #[test]
    fn display_prints_symbol_name() {
        assert_eq!(Symbol::DoubleBar.to_string(), "DoubleBar");
        assert_eq!(format!("{}", Symbol::GrandJackpot), "GrandJackpot");
    }

    #[test]
    fn expected_spin_payout_sums_symbol_payouts() {
        let cherry = (0.5f64).powi(3) * 3.;
        assert!((Symbol::Cherry.expected_payout() - cherry).abs() < 1e-12);
        assert!((Symbol::GrandJackpot.win_probability() - 1. / 16_777_216.).abs() < 1e-15);

        let total = expected_spin_payout();

        assert!((total - 0.47411537170410156).abs() < 1e-12);
    }
}
