//! Test environment for isolated actgen runs.
//!
//! Provides `TestEnv` - a temp project directory plus a temp home so the
//! user config of the machine running the tests is never picked up.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the actgen binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Directory generated files are written to
    pub fn output_dir(&self) -> PathBuf {
        self.project_path("generated")
    }

    /// Run actgen from the project root
    ///
    /// `--output-dir` is prepended so nothing lands next to the test binary.
    pub fn generate(&self, args: &[&str]) -> TestResult {
        let output_dir = self.output_dir();
        let mut full: Vec<&str> = vec!["--output-dir", output_dir.to_str().unwrap()];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Run actgen from the project root with exactly `args`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run actgen from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_actgen"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path().join("AppData"))
            .env_remove("ACTGEN_RESOURCES")
            .env_remove("ACTGEN_DEFAULT_VALUE")
            .env_remove("ACTGEN_OUTPUT_DIR")
            .env_remove("ACTGEN_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute actgen");
        to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read a project file, panicking with the path on failure
    pub fn read_project_file(&self, relative_path: &str) -> String {
        read(&self.project_path(relative_path))
    }

    /// Read a generated file
    pub fn read_generated(&self, file_name: &str) -> String {
        read(&self.output_dir().join(file_name))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
