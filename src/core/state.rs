use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::terminal::output::Output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistoryEntry {
    pub command: String,
    /// Working directory shown in the prompt when the command ran.
    pub directory: String,
    pub output: Output,
    pub timestamp: DateTime<Utc>,
}

/// Everything one terminal session owns.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub history: Vec<CommandHistoryEntry>,
    /// Recall cursor counted back from the newest entry. `None` means the
    /// user is not recalling anything.
    pub history_index: Option<usize>,
    pub input: String,
    pub current_directory: String,
    pub suggestions: Vec<&'static str>,
    pub matrix_active: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            history_index: None,
            input: String::new(),
            current_directory: "~".to_string(),
            suggestions: Vec::new(),
            matrix_active: false,
        }
    }
}

impl SessionState {
    pub fn push_entry(&mut self, command: String, directory: String, output: Output) {
        self.history.push(CommandHistoryEntry {
            command,
            directory,
            output,
            timestamp: Utc::now(),
        });
        self.history_index = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_index = None;
    }

    /// The cursor as a signed index where -1 means not recalling.
    pub fn history_index_raw(&self) -> isize {
        self.history_index.map(|i| i as isize).unwrap_or(-1)
    }

    /// Up arrow. Stops at the oldest entry.
    pub fn history_previous(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let next = match self.history_index {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(_) => return,
        };
        self.history_index = Some(next);
        self.input = self.history[len - 1 - next].command.clone();
    }

    /// Down arrow. Past the newest entry the input is cleared.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.input.clear();
            }
            Some(i) => {
                let i = i.min(self.history.len()).saturating_sub(1);
                self.history_index = Some(i);
                if let Some(entry) = self.history.iter().rev().nth(i) {
                    self.input = entry.command.clone();
                }
            }
        }
    }
}
