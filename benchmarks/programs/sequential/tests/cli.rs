use std::process::{Command, Output};

use eyre::Result;
use test_case::test_case;

fn run_sequential(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_sequential"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test_case(&["1"]; "single read")]
#[test_case(&["1024"]; "one row")]
#[test_case(&["1048577"]; "wraps once")]
#[test_case(&["7", "extra"]; "extra arguments")]
fn sum_is_zero(args: &[&str]) -> Result<()> {
    let output = run_sequential(args)?;
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert_eq!(String::from_utf8(output.stdout)?, "0\n");
    Ok(())
}

#[test]
fn logging_stays_off_stdout() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_sequential"))
        .arg("16")
        .env("RUST_LOG", "debug")
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "0\n");
    Ok(())
}

#[test_case(&[]; "no argument")]
#[test_case(&["0"]; "zero")]
#[test_case(&["-5"]; "negative")]
#[test_case(&["many"]; "non numeric")]
#[ignore = "runs one billion iterations"]
fn invalid_or_missing_bound_still_exits_cleanly(args: &[&str]) -> Result<()> {
    let output = run_sequential(args)?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "0\n");
    Ok(())
}
