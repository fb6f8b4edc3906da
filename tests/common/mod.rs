#![allow(dead_code)]

use std::process::{Command, Output};
use tempfile::TempDir;

/// Backend URL nothing listens on; requests fail with connection refused
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/api/tickets";

/// Runs the `triage` binary with its config directory in a temp dir
pub struct TriageTest {
    pub temp_dir: TempDir,
}

impl TriageTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TriageTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_triage"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TRIAGE_CONFIG_DIR", self.temp_dir.path())
            .env_remove("TRIAGE_API_URL")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute triage command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn config_file(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }
}
