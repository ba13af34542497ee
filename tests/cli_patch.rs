//! `plugdeploy patch-config` end to end.

mod common;

use common::*;

const CLANGD: &str = "CompileFlags:\n  CompilationDatabase: build/build\n";

fn workspace_prefix(env: &TestEnv) -> String {
    env.workspace
        .path()
        .canonicalize()
        .unwrap()
        .to_string_lossy()
        .replace('\\', "/")
}

#[test]
fn patches_build_path_once() {
    let env = TestEnv::builder().with_file(".clangd", CLANGD).build();

    let result = env.run(&["patch-config"]);

    assert!(result.success, "{}", result.combined_output());
    assert_output_contains!(result, ".clangd file updated successfully.");
    let patched = std::fs::read_to_string(env.workspace_path(".clangd")).unwrap();
    assert!(
        patched.contains(&format!("{}/build/build", workspace_prefix(&env)))
            || patched.contains(&format!(
                "{}/build/build",
                env.workspace.path().to_string_lossy().replace('\\', "/")
            )),
        "unexpected content:\n{patched}"
    );

    let again = env.run(&["patch-config"]);
    assert!(again.success);
    assert_output_contains!(again, "already up to date");
    assert_eq!(
        std::fs::read_to_string(env.workspace_path(".clangd")).unwrap(),
        patched
    );
}

#[test]
fn missing_file_fails() {
    let env = TestEnv::builder().build();

    let result = env.run(&["patch-config"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains(".clangd"));
}

#[test]
fn explicit_file_flag() {
    let env = TestEnv::builder()
        .with_file("ide/settings.yaml", "db: build/build\n")
        .build();

    let result = env.run(&["patch-config", "--file", "ide/settings.yaml"]);

    assert!(result.success, "{}", result.combined_output());
    let patched = std::fs::read_to_string(env.workspace_path("ide/settings.yaml")).unwrap();
    assert!(patched.ends_with("/build/build\n"));
    assert_ne!(patched, "db: build/build\n");
}
