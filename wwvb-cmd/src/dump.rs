use std::fs::File;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::debug;
use wwvb::buffer::FRAME_SECONDS;
use wwvb::SampleBuffer;

pub fn dump(input: &Path, rate: u32, offset: Option<usize>) -> Result<()> {
    let file = File::open(input).context("opening input")?;
    let buffer = SampleBuffer::read_from(file, rate).context("reading capture")?;

    let offset = match offset {
        Some(offset) => {
            ensure!(
                offset + buffer.frame_len() <= buffer.len(),
                "offset {offset} leaves less than one frame in the capture"
            );
            offset
        }
        None => {
            let sync = wwvb::find_frame(&buffer);
            debug!(offset = sync.offset, error = sync.error, "synchronized");
            sync.offset
        }
    };

    print_frame(&buffer, offset);
    Ok(())
}

/// Prints one frame of samples, one second per line. At a correct alignment
/// the seconds can be read by eye: a marker is mostly low carrier with a
/// short high tail, a zero mostly high, a one an even split.
pub fn print_frame(buffer: &SampleBuffer, offset: usize) {
    let rate = buffer.rate() as usize;
    println!("   Sec Sample           Samples in second");
    println!("   --- -------  ----------------------------------------");
    for second in 0..FRAME_SECONDS {
        let start = offset + second * rate;
        let line: String = buffer.samples()[start..start + rate]
            .iter()
            .map(|&s| char::from(b'0' + s))
            .collect();
        println!("   {second:03} ({start:05}): {line}");
    }
}
