use super::output::OutputLine;
use crate::core::CommandHistoryEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptLine {
    Prompt { prompt: String, command: String },
    Output(OutputLine),
}

/// Flattened scrollback for display, capped at `max_scrollback` lines.
pub struct TerminalBuffer {
    lines: Vec<TranscriptLine>,
    max_scrollback: usize,
}

impl TerminalBuffer {
    pub fn new(max_scrollback: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_scrollback,
        }
    }

    pub fn push_line(&mut self, line: TranscriptLine) {
        if self.max_scrollback == 0 {
            return;
        }
        if self.lines.len() >= self.max_scrollback {
            self.lines.remove(0);
        }
        self.lines.push(line);
    }

    /// `user_host` is the `user@host` part; the directory comes from the entry.
    pub fn push_entry(&mut self, user_host: &str, entry: &CommandHistoryEntry) {
        self.push_line(TranscriptLine::Prompt {
            prompt: format!("{user_host}:{}$", entry.directory),
            command: entry.command.clone(),
        });
        for line in &entry.output.lines {
            self.push_line(TranscriptLine::Output(line.clone()));
        }
    }

    /// Lines `push_entry` adds for one entry: the prompt plus its output.
    pub fn line_count(entry: &CommandHistoryEntry) -> usize {
        1 + entry.output.lines.len()
    }

    pub fn rebuild(&mut self, user_host: &str, history: &[CommandHistoryEntry]) {
        self.lines.clear();
        for entry in history {
            self.push_entry(user_host, entry);
        }
    }

    pub fn get_lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                TranscriptLine::Prompt { prompt, command } => format!("{prompt} {command}"),
                TranscriptLine::Output(out) => out.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
