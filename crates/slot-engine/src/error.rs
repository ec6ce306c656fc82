//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("inverted time range: start {start} > end {end}")]
    InvertedRange { start: u32, end: u32 },

    #[error("time range end {end} exceeds the 1440-minute day")]
    RangeOutOfDay { end: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
