//! End-to-end tests for the gb-vendor binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gb_vendor() -> Command {
    let mut cmd = Command::cargo_bin("gb-vendor").unwrap();
    cmd.env_remove("GB_PROJECT_DIR")
        .env_remove("GB_VENDOR_DEBUG")
        .env_remove("GOROOT")
        .env_remove("RUST_LOG");
    cmd
}

fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src")).unwrap();
    fs::create_dir_all(temp_dir.path().join("vendor").join("src")).unwrap();
    temp_dir
}

fn in_project(project: &TempDir) -> Command {
    let mut cmd = gb_vendor();
    cmd.env("GB_PROJECT_DIR", project.path());
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    gb_vendor()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gb vendor command [arguments]"))
        .stderr(predicate::str::contains("purges all unreferenced dependencies"));
}

#[test]
fn test_help_flags_print_usage() {
    for flag in ["-h", "-help"] {
        gb_vendor()
            .arg(flag)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("The commands are:"));
    }
}

#[test]
fn test_help_command() {
    gb_vendor()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("The commands are:"));

    gb_vendor()
        .args(["help", "fetch"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage: gb vendor fetch"));
}

#[test]
fn test_help_errors() {
    gb_vendor()
        .args(["help", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown help topic \"frobnicate\""));

    gb_vendor()
        .args(["help", "fetch", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Too many arguments given."));
}

#[test]
fn test_missing_project_dir() {
    gb_vendor()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "don't run this binary directly, it is meant to be run as 'gb vendor ...'",
        ));
}

#[test]
fn test_unknown_command() {
    let project = create_test_project();
    in_project(&project)
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown command \"frobnicate\""));
}

#[test]
fn test_project_root_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let hint = temp_dir.path().join("nowhere");
    fs::create_dir_all(&hint).unwrap();

    gb_vendor()
        .env("GB_PROJECT_DIR", &hint)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not locate project root"));
}

#[test]
fn test_bad_goroot() {
    let project = create_test_project();
    in_project(&project)
        .env("GOROOT", project.path().join("no-such-goroot"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unable to construct context"));
}

#[test]
fn test_fetch_from_nested_directory() {
    let project = create_test_project();
    let nested = project.path().join("src").join("app");
    fs::create_dir_all(&nested).unwrap();
    let manifest = project.path().canonicalize().unwrap().join("vendor").join("manifest");

    gb_vendor()
        .env("GB_PROJECT_DIR", &nested)
        .args(["fetch", "--revision", "abc123", "github.com/pkg/errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fetch github.com/pkg/errors revision=abc123 recurse=true insecure=false",
        ))
        .stdout(predicate::str::contains(format!(
            "manifest={}",
            manifest.display()
        )));
}

#[test]
fn test_parent_dir_hint_is_canonicalized() {
    let project = create_test_project();
    let root = project.path().canonicalize().unwrap();

    gb_vendor()
        .env("GB_PROJECT_DIR", project.path().join("src").join(".."))
        .arg("purge")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "manifest={}",
            root.join("vendor").join("manifest").display()
        )));
}

#[cfg(unix)]
#[test]
fn test_symlinked_project_dir() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(project.join("src")).unwrap();
    let link = temp_dir.path().join("link");
    std::os::unix::fs::symlink(&project, &link).unwrap();
    let manifest = project.canonicalize().unwrap().join("vendor").join("manifest");

    gb_vendor()
        .env("GB_PROJECT_DIR", &link)
        .arg("purge")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("manifest={}", manifest.display())));
}

#[test]
fn test_single_dash_long_flags() {
    let project = create_test_project();
    in_project(&project)
        .args(["delete", "-all"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("delete all manifest="));

    in_project(&project)
        .args(["fetch", "-branch", "master", "-revision", "abc123", "github.com/pkg/errors"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "fetch github.com/pkg/errors branch=master revision=abc123 recurse=true",
        ));
}

#[test]
fn test_tag_conflicts_with_branch() {
    let project = create_test_project();
    in_project(&project)
        .args(["fetch", "-branch", "master", "-tag", "v1.0.0", "github.com/pkg/errors"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not parse flags for fetch"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_rejected() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let project = create_test_project();
    in_project(&project)
        .arg("fetch")
        .arg(OsString::from_vec(vec![b'x', 0xff]))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not valid UTF-8"));
}

#[test]
fn test_unknown_flag() {
    let project = create_test_project();
    in_project(&project)
        .args(["list", "--all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not parse flags"));
}

#[test]
fn test_command_failure() {
    let project = create_test_project();
    in_project(&project)
        .arg("fetch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "command \"fetch\" failed: fetch: import path missing",
        ));
}

#[test]
fn test_command_help_flag() {
    let project = create_test_project();
    in_project(&project)
        .args(["update", "--help"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--all"));
}

#[test]
fn test_debug_logging() {
    let project = create_test_project();
    in_project(&project)
        .env("GB_VENDOR_DEBUG", "1")
        .arg("purge")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("purge manifest="))
        .stderr(predicate::str::contains("project root"));
}
