//! `plugdeploy deploy` end to end.

mod common;

use common::*;

#[test]
fn deploy_named_file_unit() {
    let env = TestEnv::builder()
        .with_python_file("hello", "print('hi')\n")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "hello"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_dest_file("hello.py"), "print('hi')\n");
    assert_output_contains!(result, "Deployed file hello");
}

#[test]
fn deploy_named_folder_unit_recursively() {
    let env = TestEnv::builder()
        .with_file("python_examples/tools/__init__.py", "from .x import y\n")
        .with_file("python_examples/tools/res/icon.txt", "icon")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "tools"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_dest_file("tools/__init__.py"), "from .x import y\n");
    assert_eq!(env.read_dest_file("tools/res/icon.txt"), "icon");
    assert_output_contains!(result, "Deployed folder tools");
}

#[test]
fn deploy_without_names_deploys_everything() {
    let env = TestEnv::builder()
        .with_python_file("alpha", "a")
        .with_file("python_examples/beta/__init__.py", "b")
        .with_file("python_examples/notes.md", "not a plugin")
        .with_default_config()
        .build();

    let result = env.run(&["deploy"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_dest_file("alpha.py"), "a");
    assert_eq!(env.read_dest_file("beta/__init__.py"), "b");
    assert!(!env.dest_path("notes.md").exists());
}

#[test]
fn deploy_replaces_stale_folder_with_file() {
    let env = TestEnv::builder()
        .with_python_file("hello", "new")
        .with_default_config()
        .build();
    env.write_dest_file("hello/__init__.py", "old folder");

    let result = env.run(&["deploy", "hello"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.dest_path("hello").exists());
    assert_eq!(env.read_dest_file("hello.py"), "new");
}

#[test]
fn deploy_unknown_name_fails_and_touches_nothing() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "hello", "ghost"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("'ghost' is not a valid subfolder or source file"));
    assert!(!env.dest_path("hello.py").exists());
}

#[test]
fn deploy_rejects_path_like_names() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "../hello"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid unit name"));
}

#[test]
fn deploy_dry_run_copies_nothing() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert_output_contains!(result, "Would deploy file hello");
    assert!(!env.dest_path("hello.py").exists());
}

#[test]
fn dest_flag_overrides_config() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();
    let other = tempfile::tempdir().unwrap();

    let result = env.run(&["deploy", "hello", "--dest", other.path().to_str().unwrap()]);

    assert!(result.success, "{}", result.combined_output());
    assert!(other.path().join("hello.py").exists());
    assert!(!env.dest_path("hello.py").exists());
}

#[test]
fn json_mode_emits_ndjson_events() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every stdout line is JSON"))
        .collect();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert!(events
        .iter()
        .any(|e| e["event"] == "item_copied" && e["name"] == "hello" && e["kind"] == "file"));
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
}

#[test]
fn json_mode_reports_errors_as_events() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let result = env.run(&["deploy", "ghost", "--json"]);

    assert_eq!(result.exit_code, 1);
    let event: serde_json::Value =
        serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["code"], "not_found");
}

#[test]
fn missing_source_root_is_reported() {
    let env = TestEnv::builder().with_default_config().build();

    let result = env.run(&["deploy"]);

    assert!(!result.success);
    assert!(result.stderr.contains("python_examples"));
    assert!(result.stderr.contains("does not exist"));
}

#[test]
fn unknown_config_key_warns_but_runs() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_config("[deploy]\nfail_fsat = true\n")
        .build();

    let result = env.run(&["deploy", "hello"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'fail_fsat'"));
    assert!(result.stderr.contains("Did you mean 'fail_fast'?"));
}

#[test]
fn error_output_follows_color_flag() {
    let env = TestEnv::builder()
        .with_python_file("hello", "x")
        .with_default_config()
        .build();

    let plain = env.run(&["deploy", "ghost", "--color", "never"]);
    assert_eq!(plain.exit_code, 1);
    assert!(plain.stderr.contains("'ghost' is not a valid subfolder"));
    assert!(!plain.stderr.contains('\u{1b}'));

    let colored = env.run(&["deploy", "ghost", "--color", "always"]);
    assert_eq!(colored.exit_code, 1);
    assert!(
        colored.stderr.contains('\u{1b}'),
        "expected ANSI codes in:\n{}",
        colored.stderr
    );
}
