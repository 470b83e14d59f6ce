/// History of submitted command lines with a navigation cursor
///
/// Entries are kept in submission order, duplicates included. The cursor
/// ranges over `0..=len`; `len` means "past the end", i.e. a fresh empty
/// line. Every submission resets the cursor to past the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Step back to the previous entry.
    ///
    /// Returns `None` (and leaves the cursor alone) when already at the
    /// oldest entry or when there is no history.
    pub fn older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to the next entry.
    ///
    /// Past the newest entry this returns `None` and parks the cursor past
    /// the end, meaning the buffer should become empty.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            return self.entries.get(self.cursor).map(String::as_str);
        }
        self.cursor = self.entries.len();
        None
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_past_end(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
