//! Tagged text model for shell output.
//!
//! Command handlers never produce styled strings directly. They produce
//! [`Markup`]: lines of [`Span`]s, each carrying a semantic [`Tag`]. The
//! view layer decides what a tag looks like (see `view::theme`), so the
//! shell core stays free of any rendering concern and can be asserted on
//! in tests as plain data.

use std::fmt;

/// Semantic class of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Unstyled text
    Plain,
    /// Dimmed helper text
    Muted,
    /// Section or output header
    Header,
    /// Subsection label ("Tech Stack:", "## Projects")
    Section,
    /// A command name in `help`
    CommandName,
    /// A command argument placeholder in `help`
    CommandArg,
    /// A command description in `help`
    CommandDesc,
    /// Error text
    Error,
    /// Success marker
    Success,
    /// Inline chip, e.g. a skill or tech tag
    Chip,
    /// Profile name
    Name,
    /// Profile role
    Role,
    /// Directory entry in `ls`
    Directory,
    /// Hyperlink or address
    Link,
    /// Key in a key/value panel
    Label,
    /// Value in a key/value panel
    Value,
    /// Boot log status marker (`[  OK  ]`, `[OK]`)
    BootOk,
    /// ASCII art, with one of three gradient bands
    Art(u8),
    /// Journal entry date
    JournalDate,
    /// Journal entry kind
    Journal(JournalKind),
    /// Prompt segment: OS icon
    PromptOs,
    /// Prompt segment: working directory
    PromptDir,
    /// Prompt segment: git branch
    PromptGit,
    /// Echoed command text after a prompt
    PromptInput,
}

/// Kind tag on a growth journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JournalKind {
    Started,
    Built,
    Learned,
}

impl JournalKind {
    pub fn label(self) -> &'static str {
        match self {
            JournalKind::Started => "STARTED",
            JournalKind::Built => "BUILT",
            JournalKind::Learned => "LEARNED",
        }
    }
}

/// A run of text with a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tag: Tag,
}

impl Span {
    pub fn new(text: impl Into<String>, tag: Tag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tag::Plain)
    }
}

/// One visual line made of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::tagged(text, Tag::Plain)
    }

    pub fn tagged(text: impl Into<String>, tag: Tag) -> Self {
        Self {
            spans: vec![Span::new(text, tag)],
        }
    }

    /// Builder-style append.
    pub fn with(mut self, text: impl Into<String>, tag: Tag) -> Self {
        self.push(text, tag);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, tag: Tag) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.spans.push(Span::new(text, tag));
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// The line's text with all tags stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// True if any span on this line carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.spans.iter().any(|s| s.tag == tag)
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// Multi-line tagged text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub lines: Vec<Line>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line markup with one tag.
    pub fn line(text: impl Into<String>, tag: Tag) -> Self {
        Self {
            lines: vec![Line::tagged(text, tag)],
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::line(text, Tag::Error)
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::blank());
    }

    /// Builder-style append.
    pub fn with(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    pub fn extend(&mut self, other: Markup) {
        self.lines.extend(other.lines);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text with tags stripped, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if any span anywhere carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.lines.iter().any(|l| l.has_tag(tag))
    }

    /// Every span text carrying `tag`, in order.
    pub fn spans_tagged(&self, tag: Tag) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.tag == tag)
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
