//! Integration tests for the trail binary.
//!
//! Each invocation is one request against the session database configured in a
//! temp directory, so history has to survive between processes.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliFixture {
    _temp_dir: TempDir,
    root: PathBuf,
    config_file: PathBuf,
}

impl CliFixture {
    fn new(max_size: usize) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        let config_file = root.join("trail.toml");
        std::fs::write(
            &config_file,
            format!(
                "[history]\nmax_size = {}\n\n[storage]\nstore_path = {:?}\n",
                max_size,
                root.join("sessions").to_string_lossy()
            ),
        )
        .unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
            config_file,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_trail"))
            .env("HOME", self.root.as_os_str())
            .env("XDG_CONFIG_HOME", self.root.join("xdg").as_os_str())
            .env_remove("TRAIL_HISTORY__MAX_SIZE")
            .arg("--quiet")
            .arg("--config")
            .arg(&self.config_file)
            .arg("--workspace")
            .arg(&self.root)
            .args(args)
            .output()
            .unwrap()
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "trail {:?} should succeed: stderr={:?}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn history_names(&self, extra: &[&str]) -> Vec<String> {
        let mut args = extra.to_vec();
        args.extend(["history", "--format", "json"]);
        let out = self.run_ok(&args);
        let parsed: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect()
    }

    fn sessions_dir(&self) -> &Path {
        &self.root
    }
}

#[test]
fn test_visits_are_kept_across_invocations() {
    let fixture = CliFixture::new(4);
    fixture.run_ok(&["visit", "A", "--uri", "some/uri/1"]);
    fixture.run_ok(&["visit", "B", "--uri", "some/uri/2"]);
    fixture.run_ok(&["visit", "A", "--uri", "some/uri/3"]);
    fixture.run_ok(&["visit", "C", "--uri", "some/uri/4"]);

    assert_eq!(fixture.history_names(&[]), vec!["C", "A", "B"]);

    let last = fixture.run_ok(&["last", "--format", "json"]);
    let parsed: serde_json::Value = serde_json::from_str(last.trim()).unwrap();
    assert_eq!(parsed["name"], "C");
    assert_eq!(parsed["uri"], "some/uri/4");
}

#[test]
fn test_post_visit_is_rejected() {
    let fixture = CliFixture::new(4);
    let output = fixture.run(&["visit", "A", "--method", "POST"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GET"), "stderr was: {}", stderr);

    assert!(fixture.history_names(&[]).is_empty());
}

#[test]
fn test_max_size_flag_shrinks_stored_history() {
    let fixture = CliFixture::new(4);
    for name in ["A", "B", "C", "D", "E"] {
        fixture.run_ok(&["visit", name]);
    }
    assert_eq!(fixture.history_names(&[]), vec!["E", "D", "C", "B"]);

    assert_eq!(fixture.history_names(&["--max-size", "2"]), vec!["E", "D"]);
    assert_eq!(fixture.history_names(&[]), vec!["E", "D"]);
}

#[test]
fn test_sessions_and_forget() {
    let fixture = CliFixture::new(4);
    fixture.run_ok(&["--session", "alice", "visit", "A"]);
    fixture.run_ok(&["--session", "bob", "visit", "B"]);

    let listed = fixture.run_ok(&["sessions"]);
    assert!(listed.contains("alice"));
    assert!(listed.contains("bob"));

    fixture.run_ok(&["--session", "alice", "forget"]);
    let listed = fixture.run_ok(&["sessions"]);
    assert!(!listed.contains("alice"));

    let last = fixture.run_ok(&["--session", "alice", "last"]);
    assert_eq!(last.trim(), "No context recorded.");
    assert!(fixture.sessions_dir().join("sessions").exists());
}

#[test]
fn test_config_command_prints_effective_config() {
    let fixture = CliFixture::new(6);
    let out = fixture.run_ok(&["config"]);
    assert!(out.contains("max_size = 6"));

    let out = fixture.run_ok(&["--max-size", "3", "config"]);
    assert!(out.contains("max_size = 3"));
}

#[test]
fn test_invalid_log_flags_are_rejected() {
    let fixture = CliFixture::new(4);
    let output = fixture.run(&["--log-format", "xml", "history"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xml"), "stderr was: {}", stderr);

    let output = fixture.run(&["--log-output", "syslog", "history"]);
    assert!(!output.status.success());
}
