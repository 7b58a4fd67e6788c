use assert_cmd::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;

#[test]
fn scans_a_script_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    cmd.arg("tests/fixtures/sample.lox");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Var var "))
        .stdout(predicate::str::contains("Identifier x "))
        .stdout(predicate::str::contains("Number 1.5 1.5"))
        .stdout(predicate::str::contains("String_ \"hi\" hi"))
        .stdout(predicate::str::contains("EqualEqual == "))
        .stdout(predicate::str::contains("Eof"));

    Ok(())
}

#[test]
fn unexpected_character_sets_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    cmd.arg("tests/fixtures/unexpected.lox");
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character."))
        // Scanning carried on past the bad byte.
        .stdout(predicate::str::contains("Identifier ok "));

    Ok(())
}

#[test]
fn unterminated_string_sets_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    cmd.arg("tests/fixtures/unterminated.lox");
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("Unterminated string."));

    Ok(())
}

#[test]
fn prompt_scans_each_line() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    cmd.write_stdin("1 + 2\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Number 1 1"))
        .stdout(predicate::str::contains("Plus + "))
        .stdout(predicate::str::contains("Number 2 2"));

    Ok(())
}

#[test]
fn prompt_survives_a_lexical_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    // The error is reported but the session (and exit code) stay healthy.
    cmd.write_stdin("@\nvar after = 1;\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unexpected character."))
        .stdout(predicate::str::contains("Identifier after "));

    Ok(())
}

#[test]
fn too_many_arguments_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rlox")?;

    cmd.args(["one.lox", "two.lox"]);
    cmd.assert()
        .code(64)
        .stderr(predicate::str::contains("Usage: rlox [script]"));

    Ok(())
}
