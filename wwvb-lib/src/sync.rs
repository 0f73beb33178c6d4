use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::symbol::Symbol;

/// Frame seconds whose symbol is fixed for every frame: framing markers plus
/// the unused always-zero bits. These positions never carry data; they exist
/// so a receiver can find the frame boundary in the first place.
pub const FIXED_FRAME_MAP: [(usize, Symbol); 18] = [
    (0, Symbol::Marker),
    (4, Symbol::Zero),
    (9, Symbol::Marker),
    (10, Symbol::Zero),
    (11, Symbol::Zero),
    (14, Symbol::Zero),
    (19, Symbol::Marker),
    (20, Symbol::Zero),
    (21, Symbol::Zero),
    (24, Symbol::Zero),
    (29, Symbol::Marker),
    (34, Symbol::Zero),
    (35, Symbol::Zero),
    (39, Symbol::Marker),
    (44, Symbol::Zero),
    (49, Symbol::Marker),
    (54, Symbol::Zero),
    (59, Symbol::Marker),
];

/// A frame alignment selected by [`find_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSync {
    /// Sample offset of second 0 of the frame.
    pub offset: usize,
    /// Cumulative error across all fixed frame positions at this offset.
    pub error: u32,
}

/// Cumulative error for a candidate frame start, abandoning the candidate
/// once its partial sum exceeds `bail_above`. An abandoned sum is always
/// strictly worse than some fully scored candidate, so abandoning never
/// changes which offset wins.
fn score_offset(buffer: &SampleBuffer, offset: usize, bail_above: u32) -> u32 {
    let rate = buffer.rate() as usize;
    let mut sum = 0;
    for (second, symbol) in FIXED_FRAME_MAP {
        sum += symbol.score(buffer, offset + second * rate);
        if sum > bail_above {
            break;
        }
    }
    sum
}

/// Finds the sample offset that best works as the start of a frame.
///
/// Every candidate offset leaving a whole frame in the buffer is scored
/// against [`FIXED_FRAME_MAP`]; the global minimum wins, lowest offset on
/// ties. Candidates are scored in parallel with a shared best-so-far used
/// only to abandon hopeless candidates early.
///
/// This always selects something, even for pure noise. A best alignment is
/// not necessarily a correct one; judge the returned error (and the decode
/// scores downstream) before trusting it.
#[must_use]
pub fn find_frame(buffer: &SampleBuffer) -> FrameSync {
    let candidates = buffer.len() - buffer.frame_len() + 1;
    let best_seen = AtomicU32::new(u32::MAX);

    let (error, offset) = (0..candidates)
        .into_par_iter()
        .map(|offset| {
            let bail = best_seen.load(Ordering::Relaxed);
            let error = score_offset(buffer, offset, bail);
            best_seen.fetch_min(error, Ordering::Relaxed);
            (error, offset)
        })
        .min()
        .expect("buffer length validated to hold at least one frame");

    debug!(offset, error, candidates, "frame alignment selected");
    FrameSync { offset, error }
}
