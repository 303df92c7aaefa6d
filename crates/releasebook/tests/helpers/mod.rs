#![allow(dead_code)]

use std::path::Path;

use snapbox::cmd::{Command, OutputAssert};
use tempfile::TempDir;

pub const SAMPLE: &str = include_str!("../../../releasebook-core/tests/sample.json");

/// A temporary project directory holding the sample `changelog.json`.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("changelog.json"), SAMPLE).unwrap();
    dir
}

pub fn releasebook(dir: &Path) -> Command {
    Command::new(env!("CARGO_BIN_EXE_releasebook")).current_dir(dir)
}

pub fn stdout(assert: &OutputAssert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

pub fn stderr(assert: &OutputAssert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}
