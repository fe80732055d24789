//! # Teachbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `teachbot` binary inside its own temporary directory, with the
//! user config directory pointed there too, so no real configuration or
//! knowledge base on the machine is read or written.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_KB: &str = r#"{
  "questions": [
    { "question": "Hello", "answer": "Hi there!" },
    { "question": "What is your name?", "answer": "I'm Bot." },
    { "question": "How are you?", "answer": "Running smoothly." }
  ]
}"#;

/// An isolated working directory for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Sandbox whose `knowledge_base.json` holds `SAMPLE_KB`.
    pub fn with_sample_kb() -> Self {
        let sandbox = Self::new();
        fs::write(sandbox.kb_path(), SAMPLE_KB).expect("Failed to write sample knowledge base");
        sandbox
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The default knowledge-base location, relative to the sandbox.
    pub fn kb_path(&self) -> PathBuf {
        self.path().join("knowledge_base.json")
    }

    pub fn kb_contents(&self) -> String {
        fs::read_to_string(self.kb_path()).expect("Failed to read knowledge base")
    }

    pub fn kb_records(&self) -> Vec<(String, String)> {
        let json: serde_json::Value =
            serde_json::from_str(&self.kb_contents()).expect("Knowledge base is not JSON");
        json["questions"]
            .as_array()
            .expect("questions array")
            .iter()
            .map(|r| {
                (
                    r["question"].as_str().unwrap().to_string(),
                    r["answer"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    /// `teachbot` running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = teachbot_cmd();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("TEACHBOT_KB")
            .env_remove("TEACHBOT_THRESHOLD")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Helper returning an `assert_cmd::Command` for the compiled `teachbot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn teachbot_cmd() -> Command {
    Command::cargo_bin("teachbot").expect("Failed to find teachbot binary for testing")
}
