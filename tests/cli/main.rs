//! CLI integration tests.

mod extract;
mod init;

use std::fs;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

/// Harness for running the angex binary in an isolated project directory.
pub struct CliTest {
    dir: TempDir,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        Ok(CliTest {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        Ok(fs::read_to_string(self.dir.path().join(path))?)
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_angex"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run angex")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
