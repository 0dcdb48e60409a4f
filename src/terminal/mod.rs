use std::time::Duration;

use crate::config::Config;
use crate::core::{CommandHistoryEntry, SessionState};
use crate::registry::ProjectRegistry;
use crate::scheduler::{ScheduledTask, Scheduler, TaskHandle};

pub mod buffer;
pub mod command;
pub mod completion;
mod dispatch;
pub mod fs;
pub mod output;
pub mod parser;

pub use buffer::TerminalBuffer;
pub use command::Command;
pub use completion::{Completion, complete};
pub use fs::FileSystem;
pub use output::{LineStyle, Output, OutputLine};
pub use parser::{ParsedLine, parse_line};

/// What a submit did to the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing happened.
    Ignored,
    /// `clear` ran; the transcript is empty.
    Cleared,
    /// One entry was appended.
    Recorded,
}

/// Onboarding delays, each relative to the previous one.
const ONBOARDING_STEPS: [Duration; 3] = [
    Duration::from_millis(500),
    Duration::from_millis(1000),
    Duration::from_millis(1500),
];

pub struct TerminalSession {
    state: SessionState,
    registry: ProjectRegistry,
    fs: FileSystem,
    scheduler: Scheduler,
    config: Config,
    matrix_timer: Option<TaskHandle>,
    onboarding: Vec<TaskHandle>,
    exit_requested: bool,
}

impl TerminalSession {
    pub fn new(config: Config, registry: ProjectRegistry) -> Self {
        let fs = FileSystem::from_registry(&registry);
        Self {
            state: SessionState::default(),
            registry,
            fs,
            scheduler: Scheduler::new(),
            config,
            matrix_timer: None,
            onboarding: Vec::new(),
            exit_requested: false,
        }
    }

    /// Queues the onboarding commands if the config asks for them.
    pub fn start(&mut self) {
        if !self.config.onboarding {
            return;
        }
        tracing::info!("starting session with onboarding");
        let mut at = Duration::ZERO;
        self.onboarding = self
            .config
            .onboarding_commands
            .iter()
            .zip(ONBOARDING_STEPS)
            .map(|(command, step)| {
                at += step;
                self.scheduler
                    .schedule(at, ScheduledTask::AutoSubmit(command.clone()))
            })
            .collect();
    }

    /// Drops onboarding steps that have not run yet.
    pub(crate) fn cancel_onboarding(&mut self) {
        let pending = std::mem::take(&mut self.onboarding);
        let cancelled = pending
            .into_iter()
            .filter(|handle| self.scheduler.cancel(*handle))
            .count();
        if cancelled > 0 {
            tracing::debug!(cancelled, "onboarding cut short");
        }
    }

    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        self.state.suggestions.clear();
        let Some(parsed) = parse_line(line) else {
            return SubmitOutcome::Ignored;
        };
        let command = parsed.command();
        let directory = self.state.current_directory.clone();
        tracing::debug!(command = command.name(), args = %parsed.args, "dispatch");
        match self.execute(&command, &parsed.args, &parsed.raw) {
            Some(output) => {
                self.state.push_entry(parsed.raw, directory, output);
                SubmitOutcome::Recorded
            }
            None => SubmitOutcome::Cleared,
        }
    }

    /// Submits and empties the input buffer.
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let line = std::mem::take(&mut self.state.input);
        self.submit(&line)
    }

    /// Catches the clock up by the time spent idle, then submits the input
    /// buffer. Tasks that came due while idle run first, and any timer the
    /// command starts counts from the moment of submission.
    pub fn submit_input_after(&mut self, idle: Duration) -> SubmitOutcome {
        self.advance(idle);
        self.submit_input()
    }

    pub fn tab_complete(&mut self) -> Completion {
        let completion = complete(&self.state.input);
        match &completion {
            Completion::Single(name) => {
                self.state.input = name.to_string();
                self.state.suggestions.clear();
            }
            Completion::Many(names) => self.state.suggestions = names.clone(),
            Completion::None => {}
        }
        completion
    }

    pub fn history_previous(&mut self) {
        self.state.history_previous();
    }

    pub fn history_next(&mut self) {
        self.state.history_next();
    }

    pub fn clear_screen(&mut self) {
        tracing::info!("clearing {} history entries", self.state.history.len());
        self.state.clear_history();
    }

    /// Moves session time forward and applies due tasks. Returns the tasks
    /// that fired so the caller can react to the ones it owns (`Exit`).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        let due = self.scheduler.advance(elapsed);
        for task in &due {
            match task {
                ScheduledTask::MatrixOff => {
                    self.state.matrix_active = false;
                    self.matrix_timer = None;
                }
                ScheduledTask::AutoSubmit(command) => {
                    self.submit(command);
                }
                ScheduledTask::Exit => self.exit_requested = true,
            }
        }
        due
    }

    pub fn until_next_task(&self) -> Option<Duration> {
        self.scheduler.until_next()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.state.input
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// The newest history entries whose transcript lines fit within
    /// `max_scrollback`. Older entries stay in history but are not shown.
    pub fn scrollback(&self) -> &[CommandHistoryEntry] {
        let history = &self.state.history;
        let mut lines = 0;
        let start = history
            .iter()
            .rposition(|entry| {
                lines += TerminalBuffer::line_count(entry);
                lines > self.config.max_scrollback
            })
            .map_or(0, |i| i + 1);
        &history[start..]
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn prompt(&self) -> String {
        format!("{}:{}$", self.config.prompt(), self.state.current_directory)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
