use crate::command::RenderCommand;
use crate::style::Style;

/// One styled run of buffer text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub style: Style,
    pub text: String,
    // Index into the link span list when this run is a link.
    link: Option<usize>,
}

impl StyledRun {
    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}

/// A recorded link region, in character offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSpan {
    pub start: usize,
    pub end: usize,
    pub url: String,
}

/// The single growing display buffer plus its link registry.
///
/// Append-only between clears. Coordinates are character offsets into
/// the concatenation of all run texts; only the thread that owns the
/// buffer may call the mutating methods, which the queue enforces by
/// construction.
#[derive(Debug, Default)]
pub struct TextBuffer {
    runs: Vec<StyledRun>,
    spans: Vec<LinkSpan>,
    chars: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one render command.
    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::InsertStyledText { style, text } => self.append_run(style, text),
            RenderCommand::InsertLink { text, url } => {
                debug_assert!(!url.is_empty(), "link insert without a destination");
                self.append_link_run(text, url);
            }
            RenderCommand::Clear => self.clear(),
        }
    }

    /// Append a styled run.
    pub fn append_run(&mut self, style: Style, text: String) {
        self.chars += text.chars().count();
        self.runs.push(StyledRun {
            style,
            text,
            link: None,
        });
    }

    /// Append link text and record its span.
    pub fn append_link_run(&mut self, text: String, url: String) {
        let start = self.chars;
        self.chars += text.chars().count();
        self.spans.push(LinkSpan {
            start,
            end: self.chars,
            url,
        });
        self.runs.push(StyledRun {
            style: Style::Link,
            text,
            link: Some(self.spans.len() - 1),
        });
    }

    /// Empty the buffer and drop every recorded link span.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.spans.clear();
        self.chars = 0;
    }

    /// The URL under a character offset, if the offset falls inside a
    /// link span with a destination.
    pub fn link_at(&self, offset: usize) -> Option<&str> {
        self.spans
            .iter()
            .find(|span| span.start <= offset && offset < span.end && !span.url.is_empty())
            .map(|span| span.url.as_str())
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn link_spans(&self) -> &[LinkSpan] {
        &self.spans
    }

    pub fn len_chars(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The visible text: every run concatenated.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}
