#![allow(dead_code, deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use std::path::PathBuf;
use std::process::Command;

/// Isolated config roots for driving the jp binary
pub struct JpEnv {
    pub temp: assert_fs::TempDir,
}

impl JpEnv {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("config").create_dir_all().unwrap();
        temp.child("shared").create_dir_all().unwrap();
        Self { temp }
    }

    pub fn user_root(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    pub fn shared_root(&self) -> PathBuf {
        self.temp.path().join("shared")
    }

    /// jp command with XDG roots pointing into the temp dir
    pub fn jp(&self) -> Command {
        let mut cmd = Command::cargo_bin("jp").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.user_root())
            .env("XDG_CONFIG_DIRS", self.shared_root())
            .env("NO_COLOR", "1")
            .env_remove("JP_NAMESPACE")
            .env_remove("JP_CD_STRATEGY")
            .env_remove("JP_SHELL")
            .env_remove("COMPLETE")
            .current_dir(self.temp.path());
        cmd
    }

    /// Plant a link in a shared root, bypassing jp
    #[cfg(unix)]
    pub fn shared_link(&self, name: &str, target: &str) {
        let dir = self.shared_root().join("jump");
        std::fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(target, dir.join(name)).unwrap();
    }
}
