use std::time::Duration;

use once_cell::sync::Lazy;
use termfolio::terminal::Command;
use termfolio::{Config, ProjectRegistry, SubmitOutcome, TerminalSession};

static REGISTRY: Lazy<ProjectRegistry> =
    Lazy::new(|| ProjectRegistry::builtin().expect("built-in portfolio parses"));

fn session() -> TerminalSession {
    let config = Config {
        onboarding: false,
        ..Config::default()
    };
    TerminalSession::new(config, REGISTRY.clone())
}

#[test]
fn every_command_records_one_entry() {
    for name in Command::NAMES {
        let mut session = session();
        let outcome = session.submit(name);
        if name == "clear" {
            assert_eq!(outcome, SubmitOutcome::Cleared);
            assert!(session.state().history.is_empty());
            continue;
        }
        assert_eq!(outcome, SubmitOutcome::Recorded, "{name}");
        assert_eq!(session.state().history.len(), 1, "{name}");
        let entry = &session.state().history[0];
        assert_eq!(entry.command, name);
        assert!(!entry.output.is_empty(), "{name} produced no output");
    }
}

#[test]
fn clear_empties_history_without_recording_itself() {
    let mut session = session();
    session.submit("help");
    session.submit("about");
    assert_eq!(session.submit("clear"), SubmitOutcome::Cleared);
    assert!(session.state().history.is_empty());
    assert_eq!(session.state().history_index, None);
}

#[test]
fn blank_input_changes_nothing() {
    let mut session = session();
    session.submit("help");
    for line in ["", "   ", "\t \n"] {
        assert_eq!(session.submit(line), SubmitOutcome::Ignored);
    }
    assert_eq!(session.state().history.len(), 1);
}

#[test]
fn unknown_command_is_recorded_and_named() {
    let mut session = session();
    assert_eq!(session.submit("sudo rm -rf /"), SubmitOutcome::Recorded);
    let entry = &session.state().history[0];
    assert!(entry.output.is_error());
    assert!(entry.output.contains("sudo"));
}

#[test]
fn command_token_is_case_insensitive() {
    let mut session = session();
    session.submit("HeLp");
    let entry = &session.state().history[0];
    assert_eq!(entry.command, "HeLp");
    assert!(!entry.output.is_error());
    assert!(entry.output.contains("Available commands"));
}

#[test]
fn demo_and_screenshot_hit_every_registered_id() {
    let mut session = session();
    let ids: Vec<String> = session
        .registry()
        .projects()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    for id in &ids {
        for command in ["demo", "screenshot"] {
            session.submit(&format!("{command} {id}"));
            let output = &session.state().history.last().unwrap().output;
            assert!(!output.is_error(), "{command} {id}");
        }
    }
    let name = session.registry().find(&ids[0]).unwrap().name.clone();
    session.submit(&format!("demo {}", ids[0]));
    assert!(session.state().history.last().unwrap().output.contains(&name));
}

#[test]
fn demo_and_screenshot_miss_unknown_ids() {
    let mut session = session();
    for line in ["demo nothing-here", "screenshot nothing-here", "demo", "screenshot"] {
        session.submit(line);
        let output = &session.state().history.last().unwrap().output;
        assert!(output.is_error(), "{line}");
    }
    assert!(session.state().history[0].output.contains("nothing-here"));
}

#[test]
fn demo_ids_are_case_sensitive() {
    let mut session = session();
    session.submit("DEMO TUIBOARD");
    assert!(session.state().history[0].output.is_error());
}

#[test]
fn cd_is_cosmetic() {
    let mut session = session();
    session.submit("cd foo");
    assert_eq!(session.state().current_directory, "~/foo");
    session.submit("cd does/not/exist");
    assert_eq!(session.state().current_directory, "~/does/not/exist");
    session.submit("cd ..");
    assert_eq!(session.state().current_directory, "~");
    session.submit("cd ..");
    assert_eq!(session.state().current_directory, "~");
    session.submit("cd Projects");
    session.submit("cd");
    assert_eq!(session.state().current_directory, "~");
}

#[test]
fn prompt_directory_is_captured_per_entry() {
    let mut session = session();
    session.submit("cd projects");
    session.submit("ls");
    let history = &session.state().history;
    assert_eq!(history[0].directory, "~");
    assert_eq!(history[1].directory, "~/projects");
}

#[test]
fn cat_only_resolves_top_level_files() {
    let mut session = session();
    session.submit("cat about.txt");
    session.submit("cat projects/featured.txt");
    session.submit("cat projects");
    session.submit("cat");
    let history = &session.state().history;
    assert!(!history[0].output.is_error());
    assert!(history[1].output.is_error());
    assert!(history[2].output.contains("Is a directory"));
    assert!(history[3].output.is_error());
}

#[test]
fn ls_and_tree_show_nested_entries() {
    let mut session = session();
    session.submit("ls");
    session.submit("ls projects");
    session.submit("ls missing");
    session.submit("tree");
    let history = &session.state().history;
    assert!(history[0].output.contains("projects/"));
    assert!(history[1].output.contains("featured.txt"));
    assert!(history[2].output.is_error());
    assert!(history[3].output.contains("featured.txt"));
    assert!(history[3].output.contains("directories"));
}

#[test]
fn echo_preserves_argument_case() {
    let mut session = session();
    session.submit("ECHO   Hello    World");
    assert_eq!(session.state().history[0].output.to_text(), "Hello World");
}

#[test]
fn history_lists_previous_and_current_commands() {
    let mut session = session();
    session.submit("about");
    session.submit("skills");
    session.submit("history");
    let text = session.state().history[2].output.to_text();
    assert!(text.contains("1  about"));
    assert!(text.contains("2  skills"));
    assert!(text.contains("3  history"));
}

#[test]
fn matrix_overlay_reverts_after_five_seconds() {
    let mut session = session();
    session.submit("matrix");
    assert!(session.state().matrix_active);
    assert_eq!(session.until_next_task(), Some(Duration::from_millis(5000)));

    session.advance(Duration::from_millis(4999));
    assert!(session.state().matrix_active);
    session.advance(Duration::from_millis(1));
    assert!(!session.state().matrix_active);
}

#[test]
fn rerunning_matrix_restarts_the_timer() {
    let mut session = session();
    session.submit("matrix");
    session.advance(Duration::from_millis(3000));
    session.submit("matrix");
    session.advance(Duration::from_millis(3000));
    assert!(session.state().matrix_active);
    session.advance(Duration::from_millis(2000));
    assert!(!session.state().matrix_active);
}

#[test]
fn stats_reflect_registry_totals() {
    let mut session = session();
    let stats = session.registry().stats();
    session.submit("stats");
    let output = &session.state().history[0].output;
    assert!(output.contains(&stats.total_stars.to_string()));
    assert!(output.contains(&stats.total_forks.to_string()));
}

#[test]
fn contact_and_resume_carry_links() {
    let mut session = session();
    session.submit("contact");
    session.submit("resume");
    let history = &session.state().history;
    assert!(history[0].output.lines.iter().any(|l| l.link.is_some()));
    let resume_url = session.registry().profile.resume_url.clone();
    assert!(
        history[1]
            .output
            .lines
            .iter()
            .any(|l| l.link.as_deref() == Some(resume_url.as_str()))
    );
}

#[test]
fn submitted_command_round_trips_through_history() {
    let mut session = session();
    let inputs = ["  demo tuiboard  ", "Echo Mixed Case", "whoami"];
    for input in inputs {
        session.submit(input);
    }
    for (entry, input) in session.state().history.iter().zip(inputs) {
        assert_eq!(entry.command, input.trim());
    }
}

#[test]
fn matrix_after_idle_still_lasts_five_seconds() {
    let mut session = session();
    session.submit("help");
    *session.input_mut() = "matrix".to_string();
    session.submit_input_after(Duration::from_secs(8));
    assert!(session.state().matrix_active);
    assert_eq!(session.until_next_task(), Some(Duration::from_millis(5000)));

    session.advance(Duration::from_millis(4999));
    assert!(session.state().matrix_active);
    session.advance(Duration::from_millis(1));
    assert!(!session.state().matrix_active);
}

#[test]
fn exit_after_idle_waits_its_full_delay() {
    let mut session = session();
    *session.input_mut() = "exit".to_string();
    session.submit_input_after(Duration::from_secs(30));
    assert!(!session.exit_requested());
    session.advance(Duration::from_millis(1499));
    assert!(!session.exit_requested());
    session.advance(Duration::from_millis(1));
    assert!(session.exit_requested());
}

#[test]
fn idle_catch_up_runs_due_onboarding_before_the_command() {
    let mut session = TerminalSession::new(Config::default(), REGISTRY.clone());
    session.start();
    *session.input_mut() = "matrix".to_string();
    session.submit_input_after(Duration::from_secs(4));
    let commands: Vec<&str> = session
        .state()
        .history
        .iter()
        .map(|e| e.command.as_str())
        .collect();
    assert_eq!(commands, ["whoami", "about", "help", "matrix"]);
    assert!(session.state().matrix_active);
}
