//! Integration tests for modtree


use harness::{TestModule, modtree_cmd, outside_any_module, root_name, run_modtree};
use predicates::prelude::*;

#[test]
fn test_tests_and_non_go_files_are_excluded() {
    let module = TestModule::with_module("example.com/x");
    module.add_go_file("sub/a.go", "sub");
    module.add_go_file("sub/b_test.go", "sub");
    module.add_go_file("only_tests/c_test.go", "only");
    module.add_file("docs/README.md", "# docs\n");

    let (stdout, stderr, success) = run_modtree(module.path(), &[]);
    assert!(success, "modtree should succeed: {stderr}");

    let expected = format!(
        ". (example.com/x)\n{}\n└── sub\n    └── a.go\n",
        root_name(module.path())
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_module_without_sources_prints_bare_root() {
    let module = TestModule::with_module("example.com/empty");
    module.add_dir("a/b/c");
    module.add_file("a/notes.txt", "nothing here\n");

    let (stdout, _stderr, success) = run_modtree(module.path(), &[]);
    assert!(success);
    assert_eq!(
        stdout,
        format!(". (example.com/empty)\n{}\n", root_name(module.path()))
    );
}

#[test]
fn test_last_sibling_uses_corner() {
    let module = TestModule::with_module("example.com/abc");
    module.add_go_file("a.go", "abc");
    module.add_go_file("b.go", "abc");
    module.add_go_file("c.go", "abc");

    let (stdout, _stderr, success) = run_modtree(module.path(), &[]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[2..], ["├── a.go", "├── b.go", "└── c.go"]);
}

#[test]
fn test_nested_rendering() {
    let module = TestModule::with_module("example.com/app");
    module.add_go_file("cmd/app/main.go", "main");
    module.add_go_file("internal/store/store.go", "store");
    module.add_go_file("internal/store/cache.go", "store");
    module.add_go_file("internal/web/web.go", "web");
    module.add_go_file("app.go", "app");

    let (stdout, _stderr, success) = run_modtree(module.path(), &[]);
    assert!(success);
    let expected = format!(
        "\
. (example.com/app)
{}
├── app.go
├── cmd
│   └── app
│       └── main.go
└── internal
    ├── store
    │   ├── cache.go
    │   └── store.go
    └── web
        └── web.go
",
        root_name(module.path())
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_subdirectory_argument_uses_enclosing_module() {
    let module = TestModule::with_module("example.com/deep");
    module.add_go_file("a/b/c/leaf.go", "c");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["a/b"]);
    assert!(success);
    assert_eq!(stdout, "a/b (example.com/deep)\nb\n└── c\n    └── leaf.go\n");
}

#[test]
fn test_quoted_module_path() {
    let module = TestModule::new();
    module.add_file("go.mod", "// comment\nmodule \"example.com/quoted\" // trailing\n");
    module.add_go_file("q.go", "q");

    modtree_cmd(module.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(". (example.com/quoted)\n"))
        .stdout(predicate::str::ends_with("└── q.go\n"));
}

#[test]
fn test_multiple_paths_in_order() {
    let module = TestModule::with_module("example.com/multi");
    module.add_go_file("one/one.go", "one");
    module.add_go_file("two/two.go", "two");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["two", "one"]);
    assert!(success);
    assert_eq!(
        stdout,
        "two (example.com/multi)\ntwo\n└── two.go\n\
         one (example.com/multi)\none\n└── one.go\n"
    );
}

#[test]
fn test_file_argument_prints_single_line() {
    let module = TestModule::with_module("example.com/file");
    module.add_go_file("main.go", "main");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["main.go"]);
    assert!(success);
    assert_eq!(stdout, "main.go (example.com/file)\nmain.go\n");
}

#[test]
fn test_path_without_module() {
    let dir = TestModule::new();
    dir.add_go_file("pkg/p.go", "pkg");
    if !outside_any_module(dir.path()) {
        return;
    }

    let (stdout, _stderr, success) = run_modtree(dir.path(), &["pkg"]);
    assert!(success, "a missing module is not an error");
    assert_eq!(
        stdout,
        format!(
            "{} [no module]\n",
            dir.path().canonicalize().unwrap().join("pkg").display()
        )
    );
}

#[test]
fn test_depth_flag_limits_walk() {
    let module = TestModule::with_module("example.com/depth");
    module.add_go_file("top.go", "depth");
    module.add_go_file("level1/mid.go", "level1");
    module.add_go_file("level1/level2/deep.go", "level2");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["-d", "2"]);
    assert!(success);
    assert!(stdout.contains("mid.go"), "should show first level: {stdout}");
    assert!(!stdout.contains("deep.go"), "should stop at depth 2: {stdout}");
    assert!(!stdout.contains("level2"), "unlisted dirs are pruned: {stdout}");

    let (stdout, _stderr, _) = run_modtree(module.path(), &["-d", "1"]);
    assert!(stdout.ends_with("└── top.go\n"), "only root files: {stdout}");
    assert!(!stdout.contains("level1"));

    let (stdout, _stderr, _) = run_modtree(module.path(), &["-d", "0"]);
    assert!(stdout.contains("deep.go"), "0 means unlimited: {stdout}");
}

#[test]
fn test_negative_depth_is_unlimited() {
    let module = TestModule::with_module("example.com/depth");
    module.add_go_file("level1/level2/deep.go", "level2");

    let (unlimited, _stderr, _) = run_modtree(module.path(), &["-d", "0"]);
    for flag in [&["-d", "-1"][..], &["--depth=-5"][..]] {
        let (stdout, stderr, success) = run_modtree(module.path(), flag);
        assert!(success, "negative depth is accepted: {stderr}");
        assert!(stdout.contains("deep.go"), "negative depth means unlimited: {stdout}");
        assert_eq!(stdout, unlimited);
    }
}

#[test]
fn test_json_output() {
    let module = TestModule::with_module("example.com/json");
    module.add_go_file("lib/lib.go", "lib");
    module.add_go_file("lib/lib_test.go", "lib");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["--json", "lib"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["path"], "lib");
    assert_eq!(value["module"], "example.com/json");
    assert_eq!(value["root"]["type"], "dir");
    let children = value["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "lib.go");
    assert_eq!(children[0]["package"], "lib");
}

#[test]
fn test_color_always_marks_directories() {
    let module = TestModule::with_module("example.com/color");
    module.add_go_file("pkg/p.go", "pkg");

    let (stdout, _stderr, success) = run_modtree(module.path(), &["--color", "always"]);
    assert!(success);
    assert!(stdout.contains("\u{1b}["), "expected ANSI escapes: {stdout:?}");
    assert!(stdout.contains("p.go"));
}

#[test]
fn test_no_color_env_disables_auto_color() {
    let module = TestModule::with_module("example.com/color");
    module.add_go_file("pkg/p.go", "pkg");

    modtree_cmd(module.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let module = TestModule::with_module("example.com/logs");
    module.add_go_file("a.go", "logs");

    let (stdout, stderr, success) = run_modtree(module.path(), &["-vv"]);
    assert!(success);
    assert!(stderr.contains("listing directory"), "debug logs expected: {stderr}");
    assert!(!stdout.contains("listing directory"));
    assert!(stdout.ends_with("└── a.go\n"));
}
