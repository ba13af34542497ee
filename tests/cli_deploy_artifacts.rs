//! `plugdeploy deploy-artifacts` end to end.

mod common;

use common::*;

#[test]
fn deploys_binary_and_debug_symbols() {
    let env = TestEnv::builder()
        .with_artifact("hello_tool", "hello_tool.dll", "binary")
        .with_artifact("hello_tool", "hello_tool.pdb", "symbols")
        .with_default_config()
        .build();

    let result = env.run(&["deploy-artifacts", "hello_tool"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_dest_file("hello_tool.dll"), "binary");
    assert_eq!(env.read_dest_file("hello_tool.pdb"), "symbols");
}

#[test]
fn unbuilt_projects_are_skipped_with_a_message() {
    let env = TestEnv::builder()
        .with_artifact("hello_tool", "hello_tool.dll", "binary")
        .with_file("cpp_examples/hello_feature/src/main.cpp", "int main() {}")
        .with_default_config()
        .build();

    let result = env.run(&["deploy-artifacts"]);

    assert!(result.success, "{}", result.combined_output());
    assert_output_contains!(result, "hello_feature has not been built");
    assert!(env.dest_path("hello_tool.dll").exists());
    assert!(!env.dest_path("hello_feature.dll").exists());
}

#[test]
fn unknown_project_is_rejected_before_copying() {
    let env = TestEnv::builder()
        .with_artifact("hello_tool", "hello_tool.dll", "binary")
        .with_default_config()
        .build();

    let result = env.run(&["deploy-artifacts", "hello_tool", "ghost"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("ghost"));
    assert!(!env.dest_path("hello_tool.dll").exists());
}

#[test]
fn custom_subdir_from_config() {
    let env = TestEnv::builder()
        .with_file("cpp_examples/hello_tool/out/hello_tool.dll", "binary")
        .with_config("[artifacts]\nsubdir = \"out\"\n")
        .build();

    let result = env.run(&["deploy-artifacts"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_dest_file("hello_tool.dll"), "binary");
}
