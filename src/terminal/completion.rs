use super::command::Command;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one command matched; the input becomes this.
    Single(&'static str),
    /// Several matches, shown but not applied.
    Many(Vec<&'static str>),
    None,
}

pub fn complete(input: &str) -> Completion {
    let prefix = input.to_lowercase();
    let mut matches: Vec<&'static str> = Command::NAMES
        .iter()
        .copied()
        .filter(|name| name.starts_with(prefix.as_str()))
        .collect();
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches.remove(0)),
        _ => Completion::Many(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unique_prefix_completes() {
        assert_eq!(complete("proj"), Completion::Single("projects"));
        assert_eq!(complete("PROJ"), Completion::Single("projects"));
        assert_eq!(
            complete("pro"),
            Completion::Many(vec!["projects", "prompt-engineer"])
        );
    }

    #[test]
    fn shared_prefix_lists_all() {
        assert_eq!(
            complete("c"),
            Completion::Many(vec!["contact", "clear", "cd", "cat", "claude", "coffee"])
        );
    }

    #[test]
    fn no_match() {
        assert_eq!(complete("xyz"), Completion::None);
    }

    proptest! {
        #[test]
        fn prop_results_start_with_prefix(prefix in "[a-z-]{0,6}") {
            match complete(&prefix) {
                Completion::Single(name) => prop_assert!(name.starts_with(&prefix)),
                Completion::Many(names) => {
                    prop_assert!(names.len() > 1);
                    prop_assert!(names.iter().all(|n| n.starts_with(&prefix)));
                }
                Completion::None => {
                    prop_assert!(Command::NAMES.iter().all(|n| !n.starts_with(&prefix)));
                }
            }
        }
    }
}
