//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated log directory
//! - Writing plain and gzip-compressed syslog files
//! - Pinning the configuration file so the developer's own config is never read
//! - Executing the CLI with that context

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use logsig_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.write_log("syslog", &["Jan 01 00:00:00 hardware-1 systemd[1]: ok"]).unwrap();
///
/// let result = world.run(&["scan"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    log_dir: PathBuf,
    config_path: PathBuf,
    log_dir_from_env: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_dir = temp_dir.path().join("log");
        let config_path = temp_dir.path().join("logsig.toml");

        std::fs::create_dir_all(&log_dir).expect("Failed to create log dir");

        Self {
            temp_dir,
            log_dir,
            config_path,
            log_dir_from_env: true,
        }
    }

    /// Get the log directory the CLI scans by default.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Get the configuration file path (may not exist).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the configuration file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Stop passing the log directory through `LOGSIG_LOG_DIR`, so the
    /// config file or the `--path` flag decides it.
    pub fn without_log_dir_env(mut self) -> Self {
        self.log_dir_from_env = false;
        self
    }

    /// Write a plain log file into the log directory.
    pub fn write_log(&self, name: &str, lines: &[&str]) -> Result<PathBuf> {
        let path = self.log_dir.join(name);
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a gzip-compressed log file into the log directory.
    pub fn write_gz_log(&self, name: &str, lines: &[&str]) -> Result<PathBuf> {
        let path = self.log_dir.join(name);
        fixtures::write_gzip(&path, lines)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("LOGSIG_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");

        if self.log_dir_from_env {
            cmd.env("LOGSIG_LOG_DIR", &self.log_dir);
        } else {
            cmd.env_remove("LOGSIG_LOG_DIR");
        }

        cmd
    }

    /// Execute the logsig binary with `args` and capture its output.
    ///
    /// # Note
    /// This uses `Command::cargo_bin()`, which locates the binary in the
    /// cargo target directory next to the running test executable.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("logsig")
            .map_err(|e| anyhow::anyhow!("Failed to find logsig binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run `scan --format json` and parse the report.
    pub fn scan_json(&self, extra_args: &[&str]) -> Result<serde_json::Value> {
        let mut args = vec!["scan", "--format", "json"];
        args.extend_from_slice(extra_args);

        let result = self.run(&args)?;
        if !result.success() {
            anyhow::bail!("scan failed: {}", result.stderr());
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, if the process was not killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
