use super::command::Command;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// The trimmed line exactly as typed.
    pub raw: String,
    /// Lower-cased first token.
    pub token: String,
    /// Remaining tokens joined by single spaces, case preserved.
    pub args: String,
}

impl ParsedLine {
    pub fn command(&self) -> Command {
        Command::from_token(&self.token)
    }
}

/// Returns `None` for empty or whitespace-only input.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let raw = line.trim();
    let mut parts = raw.split_whitespace();
    let token = parts.next()?.to_lowercase();
    let args = parts.collect::<Vec<_>>().join(" ");
    Some(ParsedLine {
        raw: raw.to_string(),
        token,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_command_and_args() {
        let parsed = parse_line("  DEMO   TuiBoard  extra ").unwrap();
        assert_eq!(parsed.raw, "DEMO   TuiBoard  extra");
        assert_eq!(parsed.token, "demo");
        assert_eq!(parsed.args, "TuiBoard extra");
        assert_eq!(parsed.command(), Command::Demo);
    }

    #[test]
    fn blank_input_is_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line(" \t  "), None);
    }

    #[test]
    fn bare_command_has_empty_args() {
        let parsed = parse_line("help").unwrap();
        assert_eq!(parsed.args, "");
    }

    proptest! {
        #[test]
        fn prop_raw_is_trimmed_input(line in "[ a-zA-Z0-9.~/-]{0,40}") {
            match parse_line(&line) {
                Some(parsed) => {
                    prop_assert_eq!(parsed.raw.as_str(), line.trim());
                    prop_assert_eq!(parsed.token.clone(), parsed.token.to_lowercase());
                    prop_assert!(!parsed.args.contains("  "));
                }
                None => prop_assert!(line.trim().is_empty()),
            }
        }
    }
}
