use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated working directory seeded per test with the fixture card inputs.
pub struct TestEnv {
    _tmp: TempDir,
    pub cwd: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let cwd = tmp.path().join("work");
        fs::create_dir_all(&cwd).expect("create isolated cwd");
        Self { _tmp: tmp, cwd }
    }

    pub fn write_record(&self, value: &Value) {
        fs::write(self.cwd.join("me.json"), value.to_string()).expect("write me.json");
    }

    pub fn write_raw_record(&self, raw: &str) {
        fs::write(self.cwd.join("me.json"), raw).expect("write me.json");
    }

    pub fn write_text_template(&self, source: &str) {
        fs::write(self.cwd.join("me.txt.hb"), source).expect("write me.txt.hb");
    }

    pub fn write_html_template(&self, source: &str) {
        fs::write(self.cwd.join("me.html.hb"), source).expect("write me.html.hb");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("card");
        cmd.current_dir(&self.cwd);
        cmd
    }
}
