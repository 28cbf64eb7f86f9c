use crate::error::{FormatError, SrtError};
use crate::parser::{parse_sequence_number, parse_timing_line};
use crate::srt::Subtitle;

use std::io::{self, BufRead, BufReader, Read};
use std::iter::FusedIterator;

use log::{debug, trace};

/// UTF-8 byte order mark, stripped from the start of any line.
pub const BOM: &str = "\u{FEFF}";

/// Reads subtitles one block at a time from a line-oriented stream.
///
/// Each call to [`read_subtitle`](SubtitleReader::read_subtitle) consumes one
/// block: a sequence number, a timing line and the caption text up to the next
/// blank line. Blank lines are only skipped before the sequence number.
///
/// After an error the position in the stream is unspecified and the reader
/// should be dropped. Used as an iterator it yields the first error and then
/// ends.
pub struct SubtitleReader<R> {
    inner: R,
    line: String,
    failed: bool,
}

impl<R: Read> SubtitleReader<BufReader<R>> {
    pub fn from_read(inner: R) -> Self {
        Self::new(BufReader::new(inner))
    }
}

impl<R: BufRead> SubtitleReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            failed: false,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next subtitle. Returns `Ok(None)` once the stream is exhausted
    /// without a pending block.
    pub fn read_subtitle(&mut self) -> Result<Option<Subtitle>, SrtError> {
        let number = loop {
            if !self.next_line()? {
                return Ok(None);
            }
            if self.line.is_empty() {
                trace!("skipping blank line before sequence number");
                continue;
            }
            break parse_sequence_number(&self.line)?;
        };

        if !self.next_line()? {
            return Err(FormatError::UnexpectedEnd(number).into());
        }
        let (start, end) = parse_timing_line(&self.line)?;

        if !self.next_line()? {
            return Err(FormatError::UnexpectedEnd(number).into());
        }
        // An empty first text line closes the block just like any later one.
        let mut text = String::new();
        if !self.line.is_empty() {
            text.push_str(&self.line);
            while self.next_line()? && !self.line.is_empty() {
                text.push('\n');
                text.push_str(&self.line);
            }
        }

        debug!(
            "read subtitle {} ({:?} --> {:?}, {} bytes of text)",
            number,
            start,
            end,
            text.len()
        );
        Ok(Some(Subtitle {
            number,
            start,
            end,
            text,
        }))
    }

    /// Load the next line into the buffer without its line ending or BOM.
    /// Returns false at end of stream.
    fn next_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.inner.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
        }
        if self.line.ends_with('\r') {
            self.line.pop();
        }
        if self.line.starts_with(BOM) {
            trace!("stripping byte order mark");
            self.line.drain(..BOM.len());
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for SubtitleReader<R> {
    type Item = Result<Subtitle, SrtError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read_subtitle().transpose();
        if let Some(Err(_)) = item {
            self.failed = true;
        }
        item
    }
}

impl<R: BufRead> FusedIterator for SubtitleReader<R> {}
