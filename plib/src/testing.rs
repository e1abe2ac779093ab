//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    /// Working directory the utility is started in
    pub dir: PathBuf,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Path of a workspace binary built by the same cargo invocation as the tests
pub fn test_bin_path(cmd: &str) -> PathBuf {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };
    std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap() // Move up to the workspace root from the current package directory
        .join(relpath)
}

/// Run a test command inside `dir` with environment variables
///
/// This is the core test runner. The utilities under test take their input
/// from the working directory, so every run names one explicitly.
pub fn run_test_base_with_env(
    cmd: &str,
    args: &Vec<String>,
    dir: &Path,
    env_vars: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(test_bin_path(cmd));
    command
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in env_vars {
        command.env(key, value);
    }

    let child = command
        .spawn()
        .unwrap_or_else(|_| panic!("failed to spawn command {cmd}"));

    child.wait_with_output().expect("failed to wait for child")
}

/// Run a test with custom environment variables
///
/// Compares stdout, stderr and the exit status against the plan.
pub fn run_test_with_env(plan: TestPlan, env_vars: &[(&str, &str)]) {
    let output = run_test_base_with_env(&plan.cmd, &plan.args, &plan.dir, env_vars);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

/// Run a test with custom environment variables and a checker function
///
/// The checker receives the plan and the raw process output.
pub fn run_test_with_checker_and_env<F: FnMut(&TestPlan, &Output)>(
    plan: TestPlan,
    env_vars: &[(&str, &str)],
    mut checker: F,
) {
    let output = run_test_base_with_env(&plan.cmd, &plan.args, &plan.dir, env_vars);
    checker(&plan, &output);
}
