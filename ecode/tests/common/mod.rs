use std::ffi::OsStr;
use std::process::{Command, Output};

pub fn run_ecode(args: &[&str]) -> Output {
    run_ecode_os(args)
}

pub fn run_ecode_os<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ecode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ecode")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected to find '{needle}' in output, got: {haystack}"
    );
}
