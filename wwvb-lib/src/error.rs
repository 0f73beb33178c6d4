#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Not enough samples")]
    NotEnoughData { actual: usize, minimum: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Sample rates must be nonzero multiples of 10 so the symbol duty-cycle
    /// splits land on whole samples.
    #[error("Invalid sample rate: {0}")]
    InvalidRate(u32),

    #[error("Invalid sample value {value} at offset {offset}")]
    InvalidSample { offset: usize, value: u8 },

    #[error("Day of year {day} out of range")]
    InvalidDayOfYear { day: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
