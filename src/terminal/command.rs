/// Every command the terminal understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Stats,
    Achievements,
    Timeline,
    Demo,
    Screenshot,
    Contact,
    Resume,
    Clear,
    Ls,
    Cd,
    Cat,
    Tree,
    Whoami,
    Date,
    Echo,
    History,
    Claude,
    PromptEngineer,
    ZeroToHero,
    Matrix,
    Hack,
    Coffee,
    Exit,
    Unknown(String),
}

impl Command {
    /// Names offered by `help` and tab completion, in display order.
    pub const NAMES: [&'static str; 27] = [
        "help",
        "about",
        "skills",
        "projects",
        "stats",
        "achievements",
        "timeline",
        "demo",
        "screenshot",
        "contact",
        "resume",
        "clear",
        "ls",
        "cd",
        "cat",
        "tree",
        "whoami",
        "date",
        "echo",
        "history",
        "claude",
        "prompt-engineer",
        "zero-to-hero",
        "matrix",
        "hack",
        "coffee",
        "exit",
    ];

    /// `token` must already be lower-cased.
    pub fn from_token(token: &str) -> Self {
        match token {
            "help" => Command::Help,
            "about" => Command::About,
            "skills" => Command::Skills,
            "projects" => Command::Projects,
            "stats" => Command::Stats,
            "achievements" => Command::Achievements,
            "timeline" => Command::Timeline,
            "demo" => Command::Demo,
            "screenshot" => Command::Screenshot,
            "contact" => Command::Contact,
            "resume" => Command::Resume,
            "clear" => Command::Clear,
            "ls" => Command::Ls,
            "cd" => Command::Cd,
            "cat" => Command::Cat,
            "tree" => Command::Tree,
            "whoami" => Command::Whoami,
            "date" => Command::Date,
            "echo" => Command::Echo,
            "history" => Command::History,
            "claude" => Command::Claude,
            "prompt-engineer" => Command::PromptEngineer,
            "zero-to-hero" => Command::ZeroToHero,
            "matrix" => Command::Matrix,
            "hack" => Command::Hack,
            "coffee" => Command::Coffee,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Stats => "stats",
            Command::Achievements => "achievements",
            Command::Timeline => "timeline",
            Command::Demo => "demo",
            Command::Screenshot => "screenshot",
            Command::Contact => "contact",
            Command::Resume => "resume",
            Command::Clear => "clear",
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Cat => "cat",
            Command::Tree => "tree",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::History => "history",
            Command::Claude => "claude",
            Command::PromptEngineer => "prompt-engineer",
            Command::ZeroToHero => "zero-to-hero",
            Command::Matrix => "matrix",
            Command::Hack => "hack",
            Command::Coffee => "coffee",
            Command::Exit => "exit",
            Command::Unknown(token) => token,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "List available commands",
            Command::About => "Who I am",
            Command::Skills => "Languages, frameworks and tools",
            Command::Projects => "Featured projects",
            Command::Stats => "Portfolio statistics",
            Command::Achievements => "Highlights so far",
            Command::Timeline => "Career timeline",
            Command::Demo => "Project details: demo <id>",
            Command::Screenshot => "Project screenshots: screenshot <id>",
            Command::Contact => "Ways to reach me",
            Command::Resume => "Download my resume",
            Command::Clear => "Clear the terminal",
            Command::Ls => "List files",
            Command::Cd => "Change directory",
            Command::Cat => "Print a file: cat <file>",
            Command::Tree => "Show the file tree",
            Command::Whoami => "Current user",
            Command::Date => "Current date and time",
            Command::Echo => "Print text",
            Command::History => "Command history",
            Command::Claude => "How I pair with AI assistants",
            Command::PromptEngineer => "Prompt engineering notes",
            Command::ZeroToHero => "My learning path",
            Command::Matrix => "Enter the matrix",
            Command::Hack => "Totally real hacking",
            Command::Coffee => "Brew a coffee",
            Command::Exit => "Leave the terminal",
            Command::Unknown(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_maps_to_a_known_variant() {
        for name in Command::NAMES {
            let command = Command::from_token(name);
            assert!(!matches!(command, Command::Unknown(_)), "{name}");
            assert_eq!(command.name(), name);
            assert!(!command.description().is_empty());
        }
    }

    #[test]
    fn unknown_keeps_its_token() {
        assert_eq!(
            Command::from_token("sudo"),
            Command::Unknown("sudo".to_string())
        );
    }
}
