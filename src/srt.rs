use std::time::Duration;

/// A single SRT cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub(crate) number: u32,
    pub(crate) start: Duration,
    pub(crate) end: Duration,
    pub(crate) text: String,
}

impl Subtitle {
    pub fn new(number: u32, start: Duration, end: Duration, text: impl Into<String>) -> Self {
        Self {
            number,
            start,
            end,
            text: text.into(),
        }
    }

    /// The sequence number as written in the source, not renumbered.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Time at which the subtitle appears on screen.
    pub fn start(&self) -> Duration {
        self.start
    }

    /// Time at which the subtitle leaves the screen.
    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Time on screen. Zero when the cue ends before it starts.
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}
