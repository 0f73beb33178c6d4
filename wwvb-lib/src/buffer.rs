use std::io::{Read, Write};

use crate::{Error, Result};

/// Seconds in one complete time-code frame.
pub const FRAME_SECONDS: usize = 60;

/// Sample rate of the reference receiver setup (one sample every 25 ms).
pub const DEFAULT_RATE: u32 = 40;

/// Capture length that guarantees a full frame is present regardless of
/// where the frame boundary falls.
pub const DEFAULT_CAPTURE_SECONDS: usize = 2 * FRAME_SECONDS;

/// A capture of carrier-level samples, one binary sample per sampling instant.
///
/// The buffer is populated once per decode attempt and read-only afterward;
/// the decoder only ever borrows it. Construction validates everything the
/// decode stages rely on, so downstream scoring never has to re-check sample
/// values or lengths.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    rate: u32,
    samples: Vec<u8>,
}

impl SampleBuffer {
    /// Creates a buffer from raw samples at `rate` samples per second.
    ///
    /// # Errors
    /// [`Error::InvalidRate`] unless `rate` is a nonzero multiple of 10,
    /// [`Error::InvalidSample`] if any sample is not 0 or 1, and
    /// [`Error::NotEnoughData`] if the capture is shorter than one frame.
    pub fn new(samples: Vec<u8>, rate: u32) -> Result<Self> {
        if rate == 0 || rate % 10 != 0 {
            return Err(Error::InvalidRate(rate));
        }
        let minimum = FRAME_SECONDS * rate as usize;
        if samples.len() < minimum {
            return Err(Error::NotEnoughData {
                actual: samples.len(),
                minimum,
            });
        }
        for (offset, &value) in samples.iter().enumerate() {
            if value > 1 {
                return Err(Error::InvalidSample { offset, value });
            }
        }
        Ok(SampleBuffer { rate, samples })
    }

    /// Reads a raw capture: one byte per sample, values 0 or 1, no header,
    /// length implicit in the file.
    ///
    /// # Errors
    /// [`Error::Io`] reading, plus everything [`SampleBuffer::new`] returns.
    pub fn read_from<R: Read>(mut reader: R, rate: u32) -> Result<Self> {
        let mut samples = Vec::new();
        reader.read_to_end(&mut samples)?;
        Self::new(samples, rate)
    }

    /// Writes the capture back out in the same raw byte-per-sample layout.
    ///
    /// # Errors
    /// [`Error::Io`] on write failure.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.samples)?;
        Ok(())
    }

    #[must_use]
    pub fn rate(&self) -> u32 {
        self.rate
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whole seconds of capture in the buffer.
    #[must_use]
    pub fn seconds(&self) -> usize {
        self.samples.len() / self.rate as usize
    }

    /// Samples in one frame at this buffer's rate.
    #[must_use]
    pub fn frame_len(&self) -> usize {
        FRAME_SECONDS * self.rate as usize
    }

    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// The one-second span starting at sample `start`.
    ///
    /// # Panics
    /// If the span extends past the end of the buffer.
    pub(crate) fn second(&self, start: usize) -> &[u8] {
        &self.samples[start..start + self.rate as usize]
    }
}
