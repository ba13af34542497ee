//! Test environment builder for isolated plugdeploy runs.
//!
//! `TestEnv` owns a temporary workspace (the directory the binary runs in),
//! a temporary plugin destination and a temporary user config directory so
//! the developer's own configuration never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the plugdeploy binary
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

pub struct TestEnv {
    /// Working directory of every run
    pub workspace: TempDir,
    /// Plugin installation directory the workspace config points at
    pub destination: TempDir,
    /// Stands in for the user config directory
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    pub fn dest_path(&self, relative: &str) -> PathBuf {
        self.destination.path().join(relative)
    }

    pub fn write_workspace_file(&self, relative: &str, content: &str) {
        write_file(&self.workspace_path(relative), content);
    }

    pub fn write_dest_file(&self, relative: &str, content: &str) {
        write_file(&self.dest_path(relative), content);
    }

    pub fn read_dest_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dest_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read deployed file {}: {}", relative, e))
    }

    /// Run plugdeploy in the workspace
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.workspace.path())
            .args(args)
            .env("PLUGDEPLOY_HOME", self.home_dir.path())
            .env("PLUGDEPLOY_NO_COLOR", "1")
            .env_remove("NO_COLOR")
            .env_remove("PLUGDEPLOY_DEST")
            .env_remove("PLUGDEPLOY_SOURCE_ROOT")
            .env_remove("PLUGDEPLOY_ARTIFACT_ROOT")
            .env_remove("PLUGDEPLOY_ORCHESTRATOR")
            .env_remove("PLUGDEPLOY_FAIL_FAST")
            .env_remove("PLUGDEPLOY_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute plugdeploy");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    workspace_files: Vec<(String, String)>,
    extra_config: Option<String>,
    write_config: bool,
}

impl TestEnvBuilder {
    /// Add a file under the workspace, parents created as needed
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.workspace_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    /// Python plugin file under `python_examples/`
    pub fn with_python_file(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("python_examples/{name}.py"), content)
    }

    /// Compiled artifact in the default build output folder of `project`
    pub fn with_artifact(self, project: &str, file: &str, content: &str) -> Self {
        self.with_file(
            &format!("cpp_examples/{project}/vsbuild/src/RelWithDebInfo/{file}"),
            content,
        )
    }

    /// Extra TOML appended after the generated `[paths]` table
    pub fn with_config(mut self, toml: &str) -> Self {
        self.extra_config = Some(toml.to_string());
        self.write_config = true;
        self
    }

    /// Write `plugdeploy.toml` pointing at the temporary destination
    pub fn with_default_config(mut self) -> Self {
        self.write_config = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let workspace = TempDir::new().expect("Failed to create workspace temp dir");
        let destination = TempDir::new().expect("Failed to create destination temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        for (relative, content) in &self.workspace_files {
            write_file(&workspace.path().join(relative), content);
        }

        if self.write_config {
            let mut config = format!(
                "[paths]\ndestination = {:?}\n",
                destination.path().to_string_lossy()
            );
            if let Some(extra) = &self.extra_config {
                config.push('\n');
                config.push_str(extra);
            }
            write_file(&workspace.path().join("plugdeploy.toml"), &config);
        }

        TestEnv {
            workspace,
            destination,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_plugdeploy")),
        }
    }
}
