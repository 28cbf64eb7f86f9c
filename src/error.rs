use std::fmt;
use std::io;

use thiserror::Error;

/// Which side of a timing line a timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeField::Start => write!(fmt, "start"),
            TimeField::End => write!(fmt, "end"),
        }
    }
}

/// Malformed SRT content. Every variant carries the offending text verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected a sequence number at {0:?}")]
    SequenceNumber(String),

    #[error("expected start and end time at {0:?}")]
    TimingLine(String),

    #[error("invalid {field} time format at {value:?}")]
    Timestamp { field: TimeField, value: String },

    #[error("unexpected end of stream in subtitle {0}")]
    UnexpectedEnd(u32),
}

#[derive(Error, Debug)]
pub enum SrtError {
    #[error("srt: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SrtError {
    pub fn is_format(&self) -> bool {
        matches!(self, SrtError::Format(_))
    }
}
