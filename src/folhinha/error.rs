use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolhinhaError {
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid fixed-holiday entry: day {day} of month {month}")]
    InvalidFixedHoliday { day: u32, month: u32 },

    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolhinhaError>;
