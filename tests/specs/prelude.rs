//! Shared helpers for behavioral specs.
//!
//! `Project` owns a scratch directory; `ledger()` runs the binary inside
//! it so ledger files can be named by relative path.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Size of one on-disk record
pub const RECORD_SIZE: u64 = 88;

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Length of a file inside the project
    pub fn file_len(&self, name: &str) -> u64 {
        std::fs::metadata(self.path().join(name)).unwrap().len()
    }

    /// Write raw bytes to a file inside the project
    pub fn file(&self, name: &str, contents: &[u8]) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    pub fn ledger(&self) -> CliBuilder {
        CliBuilder {
            cmd: {
                #[allow(deprecated)]
                let mut cmd = Command::cargo_bin("ledger").unwrap();
                cmd.current_dir(self.path())
                    .env_remove("LEDGER_FORMAT")
                    .env_remove("LEDGER_LOG");
                cmd
            },
        }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run and require exit code 0
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_eq!(run.code, Some(0), "expected success\nstderr:\n{}", run.stderr);
        run
    }

    /// Run and require exit code 1
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_eq!(run.code, Some(1), "expected failure\nstdout:\n{}", run.stdout);
        run
    }
}

pub struct RunAssert {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    /// Number of non-empty stdout lines
    pub fn stdout_lines(&self) -> usize {
        self.stdout.lines().filter(|l| !l.is_empty()).count()
    }
}
