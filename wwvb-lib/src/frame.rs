use std::fmt;

use tracing::trace;

use crate::buffer::SampleBuffer;
use crate::symbol::Symbol;
use crate::sync::{find_frame, FrameSync};

/// Which frame seconds make up each field and the positional weight each bit
/// carries. Weights are per decimal digit (binary within a digit), so the
/// decoded value is just the sum of weights at positions that read as one.
const MINUTES_CODE: &[(usize, u32)] = &[(1, 40), (2, 20), (3, 10), (5, 8), (6, 4), (7, 2), (8, 1)];
const HOURS_CODE: &[(usize, u32)] = &[(12, 20), (13, 10), (15, 8), (16, 4), (17, 2), (18, 1)];
const DAY_OF_YEAR_CODE: &[(usize, u32)] = &[
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
const YEAR_CODE: &[(usize, u32)] = &[
    (45, 80),
    (46, 40),
    (47, 20),
    (48, 10),
    (50, 8),
    (51, 4),
    (52, 2),
    (53, 1),
];
const LEAP_YEAR_CODE: &[(usize, u32)] = &[(55, 1)];
const LEAP_SECOND_CODE: &[(usize, u32)] = &[(56, 1)];
const DST_CODE: &[(usize, u32)] = &[(57, 2), (58, 1)];

/// The named fields carried by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    Hours,
    Minutes,
    DayOfYear,
    Year,
    LeapYearIndicator,
    LeapSecondWarning,
    Dst,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Hours,
        FieldKind::Minutes,
        FieldKind::DayOfYear,
        FieldKind::Year,
        FieldKind::LeapYearIndicator,
        FieldKind::LeapSecondWarning,
        FieldKind::Dst,
    ];

    pub(crate) fn code(self) -> &'static [(usize, u32)] {
        match self {
            FieldKind::Hours => HOURS_CODE,
            FieldKind::Minutes => MINUTES_CODE,
            FieldKind::DayOfYear => DAY_OF_YEAR_CODE,
            FieldKind::Year => YEAR_CODE,
            FieldKind::LeapYearIndicator => LEAP_YEAR_CODE,
            FieldKind::LeapSecondWarning => LEAP_SECOND_CODE,
            FieldKind::Dst => DST_CODE,
        }
    }

    /// Number of coded bits in the field.
    #[must_use]
    pub fn code_len(self) -> usize {
        self.code().len()
    }

    /// Digits needed to print the field's largest value.
    #[must_use]
    pub fn display_width(self) -> usize {
        match self {
            FieldKind::DayOfYear => 3,
            FieldKind::LeapYearIndicator | FieldKind::LeapSecondWarning => 1,
            _ => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Hours => "hours",
            FieldKind::Minutes => "minutes",
            FieldKind::DayOfYear => "day",
            FieldKind::Year => "year",
            FieldKind::LeapYearIndicator => "lyi",
            FieldKind::LeapSecondWarning => "lsw",
            FieldKind::Dst => "dst",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded field with its quality scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldValue {
    pub kind: FieldKind,
    /// Weighted sum of the field's bits. Only meaningful when `score` is
    /// `Some`.
    pub value: u32,
    /// Total error count across the field's coded bits, or `None` when the
    /// decode failed because a marker best-matched a data position.
    pub score: Option<u32>,
    /// Error count of the field's worst single bit. A failed field reports
    /// the maximum possible per-second score (the sample rate).
    pub worst: u32,
}

impl FieldValue {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.score.is_none()
    }
}

/// Decodes one field at the frame alignment `frame_start`.
///
/// Classifies the symbol at each coded position. A position that best
/// matches a marker fails the whole field immediately: markers never carry
/// data, so one showing up mid-field means the alignment or the reception is
/// not trustworthy. Failure is an expected outcome on poor reception, not an
/// error; other fields decode independently.
///
/// # Panics
/// If `frame_start` does not leave a whole frame in the buffer.
#[must_use]
pub fn decode_field(buffer: &SampleBuffer, frame_start: usize, kind: FieldKind) -> FieldValue {
    let rate = buffer.rate() as usize;
    let mut value = 0;
    let mut total = 0;
    let mut worst = 0;

    for &(second, weight) in kind.code() {
        let (symbol, score) = Symbol::classify(buffer, frame_start + second * rate);
        if score > worst {
            worst = score;
        }
        match symbol {
            Symbol::Marker => {
                trace!(field = %kind, second, "marker in a data position; field failed");
                return FieldValue {
                    kind,
                    value: 0,
                    score: None,
                    worst: buffer.rate(),
                };
            }
            Symbol::One => value += weight,
            Symbol::Zero => {}
        }
        total += score;
    }

    FieldValue {
        kind,
        value,
        score: Some(total),
        worst,
    }
}

/// All fields of one frame, decoded at a single alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedFrame {
    pub hours: FieldValue,
    pub minutes: FieldValue,
    pub day_of_year: FieldValue,
    pub year: FieldValue,
    pub leap_year: FieldValue,
    pub leap_second: FieldValue,
    pub dst: FieldValue,
}

impl DecodedFrame {
    #[must_use]
    pub fn fields(&self) -> [&FieldValue; 7] {
        [
            &self.hours,
            &self.minutes,
            &self.day_of_year,
            &self.year,
            &self.leap_year,
            &self.leap_second,
            &self.dst,
        ]
    }

    /// Sum of error scores across the fields that decoded.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.fields().iter().filter_map(|f| f.score).sum()
    }

    #[must_use]
    pub fn failed_fields(&self) -> usize {
        self.fields().iter().filter(|f| f.is_failed()).count()
    }

    /// Worst single-second error anywhere in the frame. This is the statistic
    /// the reliability tiers are calibrated against.
    #[must_use]
    pub fn worst_score(&self) -> u32 {
        self.fields()
            .iter()
            .map(|f| f.worst)
            .max()
            .expect("frame always has fields")
    }

    #[must_use]
    pub fn reliability(&self) -> crate::reliability::Reliability {
        crate::reliability::Reliability::classify(self.worst_score())
    }
}

/// Decodes every field of the frame starting at `frame_start`.
///
/// Fields are independent: one failing leaves the rest intact.
///
/// # Panics
/// If `frame_start` does not leave a whole frame in the buffer.
#[must_use]
pub fn decode_frame(buffer: &SampleBuffer, frame_start: usize) -> DecodedFrame {
    DecodedFrame {
        hours: decode_field(buffer, frame_start, FieldKind::Hours),
        minutes: decode_field(buffer, frame_start, FieldKind::Minutes),
        day_of_year: decode_field(buffer, frame_start, FieldKind::DayOfYear),
        year: decode_field(buffer, frame_start, FieldKind::Year),
        leap_year: decode_field(buffer, frame_start, FieldKind::LeapYearIndicator),
        leap_second: decode_field(buffer, frame_start, FieldKind::LeapSecondWarning),
        dst: decode_field(buffer, frame_start, FieldKind::Dst),
    }
}

/// A complete decode: the selected alignment plus every field decoded there.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub sync: FrameSync,
    pub frame: DecodedFrame,
}

/// Locates the most probable frame start and decodes every field there.
#[must_use]
pub fn decode(buffer: &SampleBuffer) -> Decoded {
    let sync = find_frame(buffer);
    let frame = decode_frame(buffer, sync.offset);
    Decoded { sync, frame }
}
