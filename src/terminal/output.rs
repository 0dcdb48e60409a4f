use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Plain,
    Heading,
    Accent,
    Success,
    Muted,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
    /// Opened in the browser when the line is clicked.
    pub link: Option<String>,
}

/// The rendered result of one command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub lines: Vec<OutputLine>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new().push(LineStyle::Error, text)
    }

    pub fn push(mut self, style: LineStyle, text: impl Into<String>) -> Self {
        self.lines.push(OutputLine {
            text: text.into(),
            style,
            link: None,
        });
        self
    }

    pub fn plain(self, text: impl Into<String>) -> Self {
        self.push(LineStyle::Plain, text)
    }

    pub fn heading(self, text: impl Into<String>) -> Self {
        self.push(LineStyle::Heading, text)
    }

    pub fn accent(self, text: impl Into<String>) -> Self {
        self.push(LineStyle::Accent, text)
    }

    pub fn success(self, text: impl Into<String>) -> Self {
        self.push(LineStyle::Success, text)
    }

    pub fn muted(self, text: impl Into<String>) -> Self {
        self.push(LineStyle::Muted, text)
    }

    pub fn link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.lines.push(OutputLine {
            text: text.into(),
            style: LineStyle::Accent,
            link: Some(url.into()),
        });
        self
    }

    pub fn blank(self) -> Self {
        self.push(LineStyle::Plain, "")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.lines.iter().any(|l| l.style == LineStyle::Error)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
