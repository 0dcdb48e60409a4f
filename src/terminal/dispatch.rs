use std::time::Duration;

use super::TerminalSession;
use super::command::Command;
use super::fs::FsNode;
use super::output::Output;
use crate::registry::Project;
use crate::scheduler::ScheduledTask;

impl TerminalSession {
    /// Runs one parsed command. `None` means nothing is recorded (`clear`).
    pub(super) fn execute(&mut self, command: &Command, args: &str, raw: &str) -> Option<Output> {
        let output = match command {
            Command::Help => self.help(),
            Command::About => self.about(),
            Command::Skills => self.skills(),
            Command::Projects => self.projects(),
            Command::Stats => self.stats(),
            Command::Achievements => self.achievements(),
            Command::Timeline => self.timeline(),
            Command::Demo => self.demo(args),
            Command::Screenshot => self.screenshot(args),
            Command::Contact => self.contact(),
            Command::Resume => self.resume(),
            Command::Clear => {
                self.clear_screen();
                return None;
            }
            Command::Ls => self.ls(args),
            Command::Cd => self.cd(args),
            Command::Cat => self.cat(args),
            Command::Tree => self.tree(),
            Command::Whoami => self.whoami(),
            Command::Date => date(),
            Command::Echo => Output::new().plain(args),
            Command::History => self.history(raw),
            Command::Claude => claude(),
            Command::PromptEngineer => prompt_engineer(),
            Command::ZeroToHero => zero_to_hero(),
            Command::Matrix => self.matrix(),
            Command::Hack => hack(),
            Command::Coffee => coffee(),
            Command::Exit => self.exit(),
            Command::Unknown(token) => Output::error(format!("command not found: {token}"))
                .muted("Type 'help' to see available commands."),
        };
        Some(output)
    }

    fn help(&self) -> Output {
        let mut out = Output::new().heading("Available commands:");
        for name in Command::NAMES {
            let command = Command::from_token(name);
            out = out.plain(format!("  {:<16} {}", name, command.description()));
        }
        out.blank()
            .muted("Tab completes commands, ↑/↓ walks through history, Ctrl+L clears.")
    }

    fn about(&self) -> Output {
        let profile = &self.registry.profile;
        let mut out = Output::new()
            .heading(profile.name.clone())
            .accent(format!("{} · {}", profile.role, profile.location))
            .blank();
        for line in &profile.bio {
            out = out.plain(line.clone());
        }
        out.blank().muted("Try 'skills', 'projects' or 'timeline'.")
    }

    fn skills(&self) -> Output {
        let tech = &self.registry.technologies;
        let mut out = Output::new().heading("Skills");
        for (label, items) in [
            ("Languages", &tech.languages),
            ("TUI frameworks", &tech.tui_frameworks),
            ("Web frameworks", &tech.web_frameworks),
            ("Terminal tools", &tech.terminal_tools),
        ] {
            if items.is_empty() {
                continue;
            }
            out = out
                .accent(format!("{label}:"))
                .plain(format!("  {}", items.join(" · ")));
        }
        out
    }

    fn projects(&self) -> Output {
        let stats = self.registry.stats();
        let mut out = Output::new().heading("Featured projects");
        for project in self.registry.featured() {
            let stars = project
                .stars()
                .map(|s| format!("  ★ {s}"))
                .unwrap_or_default();
            out = out
                .accent(format!("{} ({}){}", project.name, project.id, stars))
                .plain(format!("  {}", project.tagline))
                .muted(format!("  {}", project.tech_stack.join(", ")));
        }
        out.blank().muted(format!(
            "{} projects in total ({} TUI, {} web). Run 'demo <id>' for details.",
            stats.total_projects, stats.tui_projects, stats.web_projects
        ))
    }

    fn stats(&self) -> Output {
        let stats = self.registry.stats();
        Output::new()
            .heading("Portfolio stats")
            .plain(format!("  Projects       {}", stats.total_projects))
            .plain(format!("  GitHub stars   {}", stats.total_stars))
            .plain(format!("  Forks          {}", stats.total_forks))
            .plain(format!("  TUI projects   {}", stats.tui_projects))
            .plain(format!("  Web projects   {}", stats.web_projects))
            .plain(format!("  Tools          {}", stats.tool_projects))
            .plain(format!("  Technologies   {}", stats.technology_count()))
    }

    fn achievements(&self) -> Output {
        let mut out = Output::new().heading("Achievements");
        for item in &self.registry.achievements {
            out = out.success(format!("  ★ {item}"));
        }
        out
    }

    fn timeline(&self) -> Output {
        let mut out = Output::new().heading("Timeline");
        for entry in &self.registry.profile.timeline {
            out = out
                .accent(format!("  {:<12} {}", entry.period, entry.title))
                .muted(format!("  {:<12} {}", "", entry.detail));
        }
        out
    }

    fn lookup(&self, command: &str, args: &str) -> Result<&Project, Output> {
        let id = args.split_whitespace().next().unwrap_or("");
        if id.is_empty() {
            return Err(Output::error(format!("usage: {command} <project-id>"))
                .muted(format!("available: {}", self.registry.ids().join(", "))));
        }
        self.registry.find(id).ok_or_else(|| {
            Output::error(format!("Project not found: {id}"))
                .muted(format!("available: {}", self.registry.ids().join(", ")))
        })
    }

    fn demo(&self, args: &str) -> Output {
        let project = match self.lookup("demo", args) {
            Ok(project) => project,
            Err(out) => return out,
        };
        let mut out = Output::new()
            .heading(project.name.clone())
            .accent(project.tagline.clone())
            .blank()
            .plain(project.description.clone())
            .blank()
            .plain(format!("Stack:    {}", project.tech_stack.join(", ")))
            .plain(format!("Category: {}", project.category.label()));
        if let Some(stars) = project.stars() {
            out = out.plain(format!("Stars:    ★ {stars}"));
        }
        for link in &project.links {
            out = out.link(format!("{}: {}", link.label, link.url), link.url.clone());
        }
        out
    }

    fn screenshot(&self, args: &str) -> Output {
        let project = match self.lookup("screenshot", args) {
            Ok(project) => project,
            Err(out) => return out,
        };
        if project.screenshots.is_empty() {
            return Output::new().muted(format!("No screenshots available for {}.", project.name));
        }
        let mut out = Output::new().heading(format!("{} screenshots", project.name));
        for (i, shot) in project.screenshots.iter().enumerate() {
            out = out.plain(format!("  [{}] {}", i + 1, shot));
        }
        out
    }

    fn contact(&self) -> Output {
        let profile = &self.registry.profile;
        let mut out = Output::new().heading("Contact").link(
            format!("  Email     {}", profile.email),
            format!("mailto:{}", profile.email),
        );
        for link in &profile.links {
            out = out.link(format!("  {:<9} {}", link.label, link.url), link.url.clone());
        }
        out
    }

    fn resume(&self) -> Output {
        let url = &self.registry.profile.resume_url;
        Output::new()
            .success("Resume ready.")
            .link(format!("Download: {url}"), url.clone())
    }

    fn ls(&self, args: &str) -> Output {
        if args.is_empty() {
            let names: Vec<String> = self.fs.entries().iter().map(|e| e.display_name()).collect();
            return Output::new().plain(names.join("  "));
        }
        let target = args.trim_end_matches('/');
        match self.fs.get(target).map(|e| &e.node) {
            Some(FsNode::Directory { children }) => {
                let names: Vec<String> = children.iter().map(|e| e.display_name()).collect();
                Output::new().plain(names.join("  "))
            }
            Some(FsNode::File { .. }) => Output::new().plain(target),
            None => Output::error(format!(
                "ls: cannot access '{args}': No such file or directory"
            )),
        }
    }

    fn cd(&mut self, args: &str) -> Output {
        self.state.current_directory = if args.is_empty() || args == ".." {
            "~".to_string()
        } else {
            format!("~/{args}")
        };
        Output::new().muted(format!("Now in {}", self.state.current_directory))
    }

    fn cat(&self, args: &str) -> Output {
        if args.is_empty() {
            return Output::error("cat: missing file operand");
        }
        match self.fs.get(args).map(|e| &e.node) {
            Some(FsNode::File { content }) => content
                .lines()
                .fold(Output::new(), |out, line| out.plain(line)),
            Some(FsNode::Directory { .. }) => Output::error(format!("cat: {args}: Is a directory")),
            None => Output::error(format!("cat: {args}: No such file or directory")),
        }
    }

    fn tree(&self) -> Output {
        let (dirs, files) = self.fs.counts();
        self.fs
            .tree_lines()
            .into_iter()
            .fold(Output::new(), |out, line| out.plain(line))
            .blank()
            .muted(format!("{dirs} directories, {files} files"))
    }

    fn whoami(&self) -> Output {
        Output::new()
            .plain(self.config.prompt_user.clone())
            .muted(format!(
                "Visiting the portfolio of {}.",
                self.registry.profile.name
            ))
    }

    fn history(&self, current: &str) -> Output {
        self.state
            .history
            .iter()
            .map(|e| e.command.as_str())
            .chain(std::iter::once(current))
            .enumerate()
            .fold(Output::new(), |out, (i, command)| {
                out.plain(format!("  {:>3}  {}", i + 1, command))
            })
    }

    fn matrix(&mut self) -> Output {
        if let Some(handle) = self.matrix_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.state.matrix_active = true;
        let delay = Duration::from_millis(self.config.matrix_duration_ms);
        self.matrix_timer = Some(self.scheduler.schedule(delay, ScheduledTask::MatrixOff));
        Output::new()
            .success("Wake up, Neo...")
            .muted("The Matrix has you. (It lets go in a few seconds.)")
    }

    fn exit(&mut self) -> Output {
        self.cancel_onboarding();
        let delay = Duration::from_millis(self.config.exit_delay_ms);
        self.scheduler.schedule(delay, ScheduledTask::Exit);
        Output::new()
            .success("Thanks for stopping by!")
            .muted("Closing the terminal...")
    }
}

fn date() -> Output {
    let now = chrono::Local::now();
    Output::new().plain(now.format("%a %b %e %H:%M:%S %Z %Y").to_string())
}

fn claude() -> Output {
    Output::new()
        .heading("Pairing with AI assistants")
        .plain("I use AI coding assistants as a fast second pair of hands:")
        .plain("  • sketching a first draft of boilerplate-heavy code")
        .plain("  • reviewing diffs for edge cases I missed")
        .plain("  • explaining unfamiliar codebases before I dive in")
        .blank()
        .muted("The design decisions and the final review stay with me.")
}

fn prompt_engineer() -> Output {
    Output::new()
        .heading("Prompt engineering notes")
        .plain("  1. Give context first, then the task.")
        .plain("  2. Show an example of the output you want.")
        .plain("  3. Ask for the reasoning when the answer matters.")
        .plain("  4. Iterate: treat prompts like code and version them.")
}

fn zero_to_hero() -> Output {
    Output::new()
        .heading("Zero to hero")
        .plain("  Shell scripts → Python tooling → web apps with React")
        .plain("  → Go services → Rust and terminal UIs")
        .blank()
        .muted("Every step started with a small tool I wanted for myself.")
}

fn hack() -> Output {
    Output::new()
        .success("[*] Initialising exploit framework...")
        .success("[*] Bypassing mainframe firewall...")
        .success("[*] Decrypting 256-bit portfolio keys...")
        .success("[*] Downloading more RAM...")
        .accent("ACCESS GRANTED")
        .muted("Just kidding. Everything here is already public. Try 'projects'.")
}

fn coffee() -> Output {
    Output::new()
        .plain("      ( (")
        .plain("       ) )")
        .plain("    ........")
        .plain("    |      |]")
        .plain("    \\      /")
        .plain("     `----'")
        .success("Here's your coffee. Back to building things.")
}
