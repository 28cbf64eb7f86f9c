//! Streaming reader for SubRip (.srt) subtitles.
//!
//! ```
//! use srtread::SubtitleReader;
//!
//! let srt = "1\n00:00:01,000 --> 00:00:02,000\nHello\n";
//! let mut reader = SubtitleReader::new(srt.as_bytes());
//! while let Some(sub) = reader.read_subtitle()? {
//!     println!("{}: {}", sub.number(), sub.text());
//! }
//! # Ok::<(), srtread::SrtError>(())
//! ```

pub mod error;
pub mod parser;
pub mod reader;
pub mod srt;

pub use crate::error::{FormatError, SrtError, TimeField};
pub use crate::reader::SubtitleReader;
pub use crate::srt::Subtitle;
