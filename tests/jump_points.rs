#![cfg(unix)]
#![allow(deprecated)]

mod common;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

use common::JpEnv;

#[test]
fn test_create_then_jump_emits_cd() {
    let env = JpEnv::new();

    env.jp()
        .args(["-c", "foo", "/tmp/x"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Created jump point: foo -> /tmp/x"));

    env.jp()
        .arg("foo")
        .assert()
        .success()
        .stdout("cd '/tmp/x'\n")
        .stderr("");

    let link = env.user_root().join("jump").join("foo");
    assert_eq!(std::fs::read_link(link).unwrap(), std::path::PathBuf::from("/tmp/x"));
}

#[test]
fn test_create_twice_fails() {
    let env = JpEnv::new();

    env.jp().args(["--create", "foo", "/tmp/x"]).assert().success();
    env.jp()
        .args(["--create", "foo", "/tmp/y"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: jump point already exists: foo",
        ));

    env.jp().arg("foo").assert().success().stdout("cd '/tmp/x'\n");
}

#[test]
fn test_create_relative_path_uses_cwd() {
    let env = JpEnv::new();
    let proj = env.temp.child("proj");
    proj.create_dir_all().unwrap();
    let cwd = proj.path().canonicalize().unwrap();

    env.jp()
        .args(["-c", "bar", "sub/../bar"])
        .current_dir(proj.path())
        .assert()
        .success();

    let expected = format!("cd '{}'\n", cwd.join("bar").display());
    env.jp()
        .arg("bar")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_jump_missing_is_not_found() {
    let env = JpEnv::new();

    env.jp()
        .arg("nope")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: jump point does not exist: nope",
        ));
}

#[test]
fn test_remove_then_jump_fails() {
    let env = JpEnv::new();

    env.jp().args(["-c", "foo", "/tmp/x"]).assert().success();
    env.jp()
        .args(["-r", "foo"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Removed jump point: foo"));
    env.jp().arg("foo").assert().code(1).stdout("");
}

#[test]
fn test_remove_missing_is_not_found() {
    let env = JpEnv::new();

    env.jp()
        .args(["--remove", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("jump point does not exist: ghost"));

    env.temp
        .child("config/jump")
        .assert(predicate::path::missing());
}

#[test]
fn test_modify_creates_and_replaces() {
    let env = JpEnv::new();

    env.jp().args(["-m", "foo", "/tmp/old"]).assert().success();
    env.jp().arg("foo").assert().stdout("cd '/tmp/old'\n");

    env.jp()
        .args(["--modify", "foo", "/tmp/new"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated jump point: foo -> /tmp/new"));
    env.jp().arg("foo").assert().stdout("cd '/tmp/new'\n");
}

#[test]
fn test_invalid_name_rejected() {
    let env = JpEnv::new();

    env.jp()
        .args(["-c", "../escape", "/tmp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid jump point name"));
    env.temp
        .child("config/escape")
        .assert(predicate::path::missing());
}

#[test]
fn test_list_table_on_stderr() {
    let env = JpEnv::new();

    env.jp().args(["-c", "a", "/tmp/a"]).assert().success();
    env.jp().args(["-c", "bcd", "/tmp/bcd"]).assert().success();

    env.jp()
        .assert()
        .success()
        .stdout("")
        .stderr("a  \t/tmp/a\nbcd\t/tmp/bcd\n");
}

#[test]
fn test_list_empty() {
    let env = JpEnv::new();
    env.jp().assert().success().stdout("").stderr("");
}

#[test]
fn test_list_merges_shared_roots() {
    let env = JpEnv::new();

    env.jp().args(["-c", "both", "/from/user"]).assert().success();
    env.shared_link("both", "/from/shared");
    env.shared_link("team", "/srv/team");

    env.jp()
        .assert()
        .success()
        .stderr("both\t/from/user\nteam\t/srv/team\n");

    env.jp().arg("team").assert().success().stdout("cd '/srv/team'\n");
}

#[test]
fn test_list_skips_regular_files() {
    let env = JpEnv::new();

    env.jp().args(["-c", "foo", "/tmp/foo"]).assert().success();
    env.temp
        .child("config/jump/README")
        .write_str("not a link")
        .unwrap();

    env.jp().assert().success().stderr("foo\t/tmp/foo\n");
}

#[test]
fn test_namespace_flag_and_env() {
    let env = JpEnv::new();

    env.jp()
        .args(["--namespace", "jp", "-c", "foo", "/tmp/x"])
        .assert()
        .success();
    env.temp
        .child("config/jp/foo")
        .assert(predicate::path::is_symlink());

    env.jp().arg("foo").assert().code(1);
    env.jp()
        .env("JP_NAMESPACE", "jp")
        .arg("foo")
        .assert()
        .success()
        .stdout("cd '/tmp/x'\n");
}

#[test]
fn test_fish_shell_quoting() {
    let env = JpEnv::new();

    env.jp().args(["-c", "odd", "/tmp/it's"]).assert().success();

    env.jp()
        .arg("odd")
        .assert()
        .success()
        .stdout("cd '/tmp/it'\\''s'\n");
    env.jp()
        .args(["--shell", "fish", "odd"])
        .assert()
        .success()
        .stdout("cd '/tmp/it\\'s'\n");
}

#[test]
fn test_in_process_strategy_prints_nothing_on_stdout() {
    let env = JpEnv::new();
    let target = env.temp.child("dest");
    target.create_dir_all().unwrap();

    env.jp()
        .args(["-c", "dest"])
        .arg(target.path())
        .assert()
        .success();

    env.jp()
        .args(["--cd-strategy", "in-process", "dest"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Changed directory to"));
}

#[test]
fn test_jump_keeps_non_utf8_target_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let env = JpEnv::new();
    let target = std::ffi::OsStr::from_bytes(b"/tmp/caf\xe9");

    env.jp().args(["-c", "cafe"]).arg(target).assert().success();

    env.jp()
        .arg("cafe")
        .assert()
        .success()
        .stdout(&b"cd '/tmp/caf\xe9'\n"[..]);
}

#[test]
fn test_list_warns_about_unreadable_entry_and_continues() {
    use std::os::unix::ffi::OsStrExt;

    let env = JpEnv::new();
    env.jp().args(["-c", "good", "/y"]).assert().success();
    let bad = env
        .user_root()
        .join("jump")
        .join(std::ffi::OsStr::from_bytes(b"bad\xff"));
    std::os::unix::fs::symlink("/x", bad).unwrap();

    let output = env.jp().assert().success().stdout("").get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let warnings: Vec<&str> = stderr.lines().filter(|line| line.starts_with('⚠')).collect();

    assert_eq!(warnings.len(), 1, "stderr: {stderr}");
    assert!(warnings[0].contains("invalid jump point name"));
    assert!(stderr.ends_with("good\t/y\n"), "stderr: {stderr}");
}

#[test]
fn test_modify_leaves_regular_file_alone() {
    let env = JpEnv::new();
    env.temp.child("config/jump").create_dir_all().unwrap();
    let notes = env.temp.child("config/jump/notes");
    notes.write_str("keep me").unwrap();

    env.jp()
        .args(["-m", "notes", "/tmp"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: jump point already exists: notes",
        ));

    notes.assert("keep me");
}
