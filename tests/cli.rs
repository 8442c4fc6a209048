//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

use implementor::emit::unescape;

const CATALOG: &str = r"
types:
  - name: com.example.Shape
    kind: interface
    modifiers: [public]
    methods:
      - { name: area, returns: double }
      - { name: name, returns: java.lang.String }
      - { name: scale, params: [double, 'int...'] }
      - { name: isEmpty, returns: boolean }
  - name: com.example.Base
    modifiers: [public, abstract]
    constructors:
      - { modifiers: [public], params: [int, java.lang.String], throws: [java.io.IOException] }
      - { modifiers: [protected] }
      - { modifiers: [private], params: [long] }
    methods:
      - { name: describe, returns: 'char[]', modifiers: [public, abstract] }
      - { name: helper, modifiers: [public] }
  - name: com.example.Locked
    modifiers: [public, abstract]
    constructors:
      - { modifiers: [private] }
  - name: com.example.Sealed
    modifiers: [public, final]
";

fn run_implement(cwd: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_implement");
    Command::new(bin)
        .current_dir(cwd)
        .env_remove("IMPLEMENT_CATALOG")
        .env_remove("CLASSPATH")
        .args(args)
        .output()
        .expect("failed to run implement binary")
}

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("implementor.yaml"), CATALOG).unwrap();
    dir
}

fn read_generated(path: &Path) -> String {
    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.is_ascii());
    unescape(&raw).unwrap()
}

#[test]
fn implements_interface_from_working_directory_catalog() {
    let dir = workspace();
    let output = run_implement(dir.path(), &["com.example.Shape", "out"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));

    let source = read_generated(&dir.path().join("out/com/example/ShapeImpl.java"));
    assert!(source.starts_with("package com.example;\n"));
    assert!(source.contains("public class ShapeImpl implements Shape {"));
    assert!(source.contains("public double area() {\n        return 0;\n    }"));
    assert!(source.contains("public java.lang.String name() {\n        return null;\n    }"));
    assert!(source.contains("public void scale(double var0, int[] var1) {\n        return;\n    }"));
    assert!(source.contains("public boolean isEmpty() {\n        return false;\n    }"));
    assert!(source.ends_with("}\n"));
}

#[test]
fn implements_abstract_class_with_forwarding_constructors() {
    let dir = workspace();
    let output = run_implement(dir.path(), &["com.example.Base", "out"]);
    assert!(output.status.success());

    let source = read_generated(&dir.path().join("out/com/example/BaseImpl.java"));
    assert!(source.contains("public class BaseImpl extends Base {"));
    assert!(source.contains(
        "public BaseImpl(int var0, java.lang.String var1) throws java.io.IOException {\n        super(var0, var1);\n    }"
    ));
    assert!(source.contains("public BaseImpl() {\n        super();\n    }"));
    assert!(!source.contains("long var0"));
    assert!(source.contains("public char[] describe() {\n        return null;\n    }"));
    assert!(!source.contains("helper"));
}

#[test]
fn explicit_catalog_option_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("types.yaml");
    std::fs::write(&catalog, CATALOG).unwrap();

    let output = run_implement(
        dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "com.example.Shape", "gen"],
    );
    assert!(output.status.success());
    assert!(dir.path().join("gen/com/example/ShapeImpl.java").is_file());
}

#[test]
fn argument_errors_exit_with_failure() {
    let dir = workspace();
    for args in [&[][..], &["com.example.Shape"][..], &["a", "b", "c"][..], &["-jar", "a.B"][..]] {
        let output = run_implement(dir.path(), args);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Argument error"), "{args:?}");
    }
}

#[test]
fn unknown_class_is_reported() {
    let dir = workspace();
    let output = run_implement(dir.path(), &["com.example.Missing", "out"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No such class"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn unimplementable_targets_write_nothing() {
    let dir = workspace();
    for name in ["com.example.Sealed", "com.example.Locked", "java.lang.Enum", "int"] {
        let output = run_implement(dir.path(), &[name, "out"]);
        assert!(!output.status.success(), "{name}");
        assert!(String::from_utf8_lossy(&output.stdout).contains("Implementation error"), "{name}");
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn output_path_that_is_a_file_is_invalid() {
    let dir = workspace();
    std::fs::write(dir.path().join("taken"), "x").unwrap();
    let output = run_implement(dir.path(), &["com.example.Shape", "taken"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid path"));
}

#[test]
fn jar_destination_that_is_a_directory_is_invalid() {
    let dir = workspace();
    std::fs::create_dir(dir.path().join("dist")).unwrap();
    let output = run_implement(dir.path(), &["-jar", "com.example.Shape", "dist"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid path"));
}

#[test]
fn help_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_implement(dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("-jar"));
}

#[test]
fn cyclic_catalog_fails_instead_of_hanging() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("cycle.yaml");
    std::fs::write(
        &catalog,
        "types:\n  - { name: a.A, superclass: a.B, modifiers: [public, abstract] }\n  - { name: a.B, superclass: a.A, modifiers: [public, abstract] }\n",
    )
    .unwrap();

    let output = run_implement(dir.path(), &["--catalog", catalog.to_str().unwrap(), "a.A", "out"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Implementation error"));
    assert!(stdout.contains("circular superclass chain"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn private_interface_methods_are_not_stubbed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("implementor.yaml"),
        "types:\n  - name: a.Tool\n    kind: interface\n    modifiers: [public]\n    methods:\n      - { name: use }\n      - { name: helper, modifiers: [private] }\n",
    )
    .unwrap();

    let output = run_implement(dir.path(), &["a.Tool", "out"]);
    assert!(output.status.success());
    let source = read_generated(&dir.path().join("out/a/ToolImpl.java"));
    assert!(source.contains("public void use() {"));
    assert!(!source.contains("helper"));
}

#[test]
fn jar_flag_is_accepted_after_options() {
    let dir = workspace();
    std::fs::create_dir(dir.path().join("dist")).unwrap();
    let output = run_implement(
        dir.path(),
        &["--catalog", "implementor.yaml", "-jar", "com.example.Shape", "dist"],
    );
    assert!(!output.status.success());
    // Reaching path validation means the jar form parsed.
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid path"));
}
