#![allow(deprecated)]

mod common;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

use common::JpEnv;

#[test]
fn test_multiple_modes_is_usage_error() {
    let env = JpEnv::new();

    env.jp()
        .args(["-c", "-r", "foo", "/tmp"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: the argument '--"))
        .stderr(predicate::str::contains("cannot be used with"))
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Options:"))
        .stderr(predicate::str::contains("For more information").not());

    env.temp
        .child("config/jump")
        .assert(predicate::path::missing());
}

#[test]
fn test_source_with_create_is_usage_error() {
    let env = JpEnv::new();

    env.jp()
        .args(["--source", "--modify", "foo"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_create_missing_path() {
    let env = JpEnv::new();

    env.jp()
        .args(["--create", "foo"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "Error: --create requires NAME and PATH\n\n",
        ))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_remove_missing_name() {
    let env = JpEnv::new();

    env.jp()
        .arg("-r")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: --remove requires NAME"));
}

#[test]
fn test_jump_with_extra_argument() {
    let env = JpEnv::new();

    env.jp()
        .args(["foo", "bar"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: too many arguments"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let env = JpEnv::new();

    env.jp()
        .arg("--bogus")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_invalid_namespace() {
    let env = JpEnv::new();

    env.jp()
        .args(["--namespace", "a/b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid namespace"));
}

#[test]
fn test_help_goes_to_stderr() {
    let env = JpEnv::new();

    env.jp()
        .arg("--help")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("--create"))
        .stderr(predicate::str::contains("--source"));
}
