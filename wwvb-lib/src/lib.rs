#![doc = include_str!("../README.md")]

mod error;

pub mod buffer;
pub mod calendar;
pub mod frame;
pub mod reliability;
pub mod symbol;
pub mod sync;

pub use buffer::SampleBuffer;
pub use error::{Error, Result};
pub use frame::{decode, decode_field, decode_frame, Decoded, DecodedFrame, FieldKind, FieldValue};
pub use reliability::Reliability;
pub use symbol::Symbol;
pub use sync::{find_frame, FrameSync};
