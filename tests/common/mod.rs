use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn reflekt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reflekt").unwrap();
    cmd.env_remove("REFLEKT_ROOT");
    cmd
}

/// Create a temporary directory with an initialized journal
#[allow(dead_code)]
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    reflekt_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Create an entry via the CLI and return its id
#[allow(dead_code)]
pub fn create_entry(dir: &Path, args: &[&str]) -> String {
    let output = reflekt_cmd()
        .current_dir(dir)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "entry creation failed");

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created entry "))
        .expect("missing created-entry line")
        .trim()
        .to_string()
}
