use crate::buffer::SampleBuffer;

/// The per-second carrier pattern for one frame second.
///
/// Each symbol occupies exactly one second and is defined by how long the
/// carrier stays low before switching high for the remainder of the second:
/// a marker is 80% low / 20% high, a zero 20% low / 80% high, and a one
/// 50% low / 50% high. Some receivers use the inverted convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Symbol {
    Zero,
    One,
    Marker,
}

impl Symbol {
    /// Tenths of the second the carrier spends low before switching high.
    const fn low_tenths(self) -> usize {
        match self {
            Symbol::Zero => 2,
            Symbol::One => 5,
            Symbol::Marker => 8,
        }
    }

    fn low_samples(self, rate: u32) -> usize {
        rate as usize / 10 * self.low_tenths()
    }

    /// Renders this symbol's ideal one-second waveform at `rate` samples per
    /// second: the low span as 0s followed by the high span as 1s.
    #[must_use]
    pub fn ideal_samples(self, rate: u32) -> Vec<u8> {
        let mut samples = vec![0u8; rate as usize];
        for s in &mut samples[self.low_samples(rate)..] {
            *s = 1;
        }
        samples
    }

    /// Error count for the one-second span at `start` against this symbol's
    /// template: the number of samples disagreeing with the ideal waveform.
    /// Zero is a perfect match.
    ///
    /// # Panics
    /// If `start` plus one second extends past the end of the buffer; bounds
    /// are the caller's responsibility.
    #[must_use]
    pub fn score(self, buffer: &SampleBuffer, start: usize) -> u32 {
        let span = buffer.second(start);
        let (low, high) = span.split_at(self.low_samples(buffer.rate()));
        let low_errors: u32 = low.iter().map(|&s| u32::from(s)).sum();
        let high_errors: u32 = high.iter().map(|&s| u32::from(s ^ 1)).sum();
        low_errors + high_errors
    }

    /// Scores the second at `start` against all three templates and returns
    /// the best match with its error count.
    ///
    /// On exact score ties the preference order is `One`, `Zero`, `Marker`.
    /// Downstream consumers depend on this order, so it is part of the
    /// contract rather than an implementation detail.
    ///
    /// # Panics
    /// Same bounds requirement as [`Symbol::score`].
    #[must_use]
    pub fn classify(buffer: &SampleBuffer, start: usize) -> (Symbol, u32) {
        let mut best = Symbol::One;
        let mut best_score = best.score(buffer, start);
        for symbol in [Symbol::Zero, Symbol::Marker] {
            let score = symbol.score(buffer, start);
            if score < best_score {
                best = symbol;
                best_score = score;
            }
        }
        (best, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::DEFAULT_RATE;

    /// One second of samples padded out to a valid buffer length; the span
    /// under test sits at offset 0.
    fn buffer_with_second(second: &[u8]) -> SampleBuffer {
        let mut samples = second.to_vec();
        samples.resize(60 * DEFAULT_RATE as usize, 0);
        SampleBuffer::new(samples, DEFAULT_RATE).unwrap()
    }

    #[test]
    fn ideal_waveforms_score_zero_against_themselves() {
        for symbol in [Symbol::Zero, Symbol::One, Symbol::Marker] {
            let buffer = buffer_with_second(&symbol.ideal_samples(DEFAULT_RATE));
            assert_eq!(symbol.score(&buffer, 0), 0);
            assert_eq!(Symbol::classify(&buffer, 0), (symbol, 0));
        }
    }

    #[test]
    fn ideal_waveform_shape() {
        let marker = Symbol::Marker.ideal_samples(40);
        assert_eq!(marker.len(), 40);
        assert_eq!(marker.iter().filter(|&&s| s == 0).count(), 32);
        assert!(marker[..32].iter().all(|&s| s == 0));
        assert!(marker[32..].iter().all(|&s| s == 1));

        let zero = Symbol::Zero.ideal_samples(40);
        assert!(zero[..8].iter().all(|&s| s == 0));
        assert!(zero[8..].iter().all(|&s| s == 1));

        let one = Symbol::One.ideal_samples(40);
        assert!(one[..20].iter().all(|&s| s == 0));
        assert!(one[20..].iter().all(|&s| s == 1));
    }

    #[test]
    fn all_low_second_scores() {
        // Dead carrier only disagrees with each template's high span.
        let buffer = buffer_with_second(&[0u8; 40]);
        assert_eq!(Symbol::Zero.score(&buffer, 0), 32);
        assert_eq!(Symbol::One.score(&buffer, 0), 20);
        assert_eq!(Symbol::Marker.score(&buffer, 0), 8);
        assert_eq!(Symbol::classify(&buffer, 0), (Symbol::Marker, 8));
    }

    #[test]
    fn all_high_second_scores() {
        let buffer = buffer_with_second(&[1u8; 40]);
        assert_eq!(Symbol::Zero.score(&buffer, 0), 8);
        assert_eq!(Symbol::One.score(&buffer, 0), 20);
        assert_eq!(Symbol::Marker.score(&buffer, 0), 32);
        assert_eq!(Symbol::classify(&buffer, 0), (Symbol::Zero, 8));
    }

    #[test]
    fn tie_prefers_one_over_zero() {
        // Zero and one templates only differ over samples 8..20. Half ones in
        // that window ties them at 6 errors each; markers score far worse.
        let mut second = [0u8; 40];
        for s in &mut second[8..14] {
            *s = 1;
        }
        for s in &mut second[20..40] {
            *s = 1;
        }
        let buffer = buffer_with_second(&second);
        assert_eq!(Symbol::Zero.score(&buffer, 0), 6);
        assert_eq!(Symbol::One.score(&buffer, 0), 6);
        assert_eq!(Symbol::classify(&buffer, 0), (Symbol::One, 6));
    }

    #[test]
    fn tie_prefers_zero_over_marker() {
        // Ones over 8..20, lows over 20..32, ones to the end: zero and marker
        // both score 12 while one scores 24.
        let mut second = [0u8; 40];
        for s in &mut second[8..20] {
            *s = 1;
        }
        for s in &mut second[32..40] {
            *s = 1;
        }
        let buffer = buffer_with_second(&second);
        assert_eq!(Symbol::Zero.score(&buffer, 0), 12);
        assert_eq!(Symbol::Marker.score(&buffer, 0), 12);
        assert_eq!(Symbol::One.score(&buffer, 0), 24);
        assert_eq!(Symbol::classify(&buffer, 0), (Symbol::Zero, 12));
    }

    #[test]
    fn score_counts_flips_one_for_one() {
        let mut second = Symbol::One.ideal_samples(DEFAULT_RATE);
        for flips in 1..=5 {
            second[flips - 1] ^= 1;
            let buffer = buffer_with_second(&second);
            assert_eq!(Symbol::One.score(&buffer, 0), flips as u32);
        }
    }
}
