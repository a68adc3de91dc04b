use anyhow::Result;
use std::process::Command;
use vowel_count::{CountConfig, CountDriver, LineReporter};

#[test]
fn test_binary_prints_single_line() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_vowel-count"))
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Number of vowels are: 5\n");
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_binary_logs_stay_off_stdout() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_vowel-count"))
        .env("RUST_LOG", "vowel_count=debug")
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Number of vowels are: 5\n");
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_driver_writes_report_through_line_reporter() -> Result<()> {
    let mut driver = CountDriver::new(LineReporter::new(Vec::new()), CountConfig::default());

    let first = driver.run()?;
    let second = driver.run()?;
    assert_eq!(first, second);

    let out = String::from_utf8(driver.into_reporter().into_inner())?;
    assert_eq!(out, "Number of vowels are: 5\nNumber of vowels are: 5\n");
    Ok(())
}

#[test]
fn test_driver_on_arbitrary_texts() -> Result<()> {
    let mut driver = CountDriver::new(LineReporter::new(Vec::new()), CountConfig::default());

    assert_eq!(driver.run_text("")?.vowels, 0);
    assert_eq!(driver.run_text("AEIOU")?.vowels, 5);
    assert_eq!(driver.run_text("rhythm 123")?.vowels, 0);
    Ok(())
}
