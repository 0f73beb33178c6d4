//! Synthetic capture construction for end-to-end tests.
//!
//! Frames are laid out from the published WWVB bit assignments rather than
//! the library's own tables, so an encoding mistake in the library shows up
//! as a decode mismatch here instead of cancelling itself out.

use wwvb::buffer::FRAME_SECONDS;
use wwvb::{SampleBuffer, Symbol};

pub const RATE: u32 = 40;

pub struct FrameSpec {
    pub hours: u32,
    pub minutes: u32,
    pub day_of_year: u32,
    pub year: u32,
    pub leap_year: bool,
    pub leap_second: bool,
    pub dst: u32,
}

const MARKER_SECONDS: [usize; 7] = [0, 9, 19, 29, 39, 49, 59];

const MINUTES_BITS: &[(usize, u32)] =
    &[(1, 40), (2, 20), (3, 10), (5, 8), (6, 4), (7, 2), (8, 1)];
const HOURS_BITS: &[(usize, u32)] = &[(12, 20), (13, 10), (15, 8), (16, 4), (17, 2), (18, 1)];
const DAY_BITS: &[(usize, u32)] = &[
    (22, 200),
    (23, 100),
    (25, 80),
    (26, 40),
    (27, 20),
    (28, 10),
    (30, 8),
    (31, 4),
    (32, 2),
    (33, 1),
];
const YEAR_BITS: &[(usize, u32)] = &[
    (45, 80),
    (46, 40),
    (47, 20),
    (48, 10),
    (50, 8),
    (51, 4),
    (52, 2),
    (53, 1),
];

fn set_bits(symbols: &mut [Symbol], bits: &[(usize, u32)], mut value: u32) {
    for &(second, weight) in bits {
        if value >= weight {
            symbols[second] = Symbol::One;
            value -= weight;
        }
    }
    assert_eq!(value, 0, "value not representable");
}

pub fn frame_symbols(spec: &FrameSpec) -> Vec<Symbol> {
    let mut symbols = vec![Symbol::Zero; FRAME_SECONDS];
    for second in MARKER_SECONDS {
        symbols[second] = Symbol::Marker;
    }
    set_bits(&mut symbols, MINUTES_BITS, spec.minutes);
    set_bits(&mut symbols, HOURS_BITS, spec.hours);
    set_bits(&mut symbols, DAY_BITS, spec.day_of_year);
    set_bits(&mut symbols, YEAR_BITS, spec.year);
    set_bits(&mut symbols, &[(55, 1)], spec.leap_year.into());
    set_bits(&mut symbols, &[(56, 1)], spec.leap_second.into());
    set_bits(&mut symbols, &[(57, 2), (58, 1)], spec.dst);
    symbols
}

/// A capture of `total_seconds` with the frame planted after `lead_seconds`
/// of idle carrier, rendered from the ideal waveforms.
pub fn capture(spec: &FrameSpec, lead_seconds: usize, total_seconds: usize) -> SampleBuffer {
    assert!(lead_seconds + FRAME_SECONDS <= total_seconds);
    let mut symbols = vec![Symbol::Zero; total_seconds];
    symbols[lead_seconds..lead_seconds + FRAME_SECONDS].copy_from_slice(&frame_symbols(spec));
    let samples: Vec<u8> = symbols
        .iter()
        .flat_map(|s| s.ideal_samples(RATE))
        .collect();
    SampleBuffer::new(samples, RATE).unwrap()
}
