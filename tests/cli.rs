use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "covidtop";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// An unknown subcommand should fail with a usage hint.
fn cli_rejects_unknown_subcommand() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("nonsense");
    cmd.assert().failure().stderr(contains("Usage"));
}

#[test]
/// `top --by` only accepts known counters.
fn top_rejects_unknown_sort_key() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("top").arg("--by").arg("vibes");
    cmd.assert()
        .failure()
        .stderr(contains("invalid value 'vibes'"));
}

#[test]
/// An API URL without a scheme is rejected before any network call.
fn top_rejects_malformed_api_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("top").arg("--api-url").arg("not-a-url");
    cmd.assert().failure().stderr(contains("Invalid API URL"));
}

#[test]
#[ignore] // Hits the live statistics API.
fn top_prints_ranked_table() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("top");
    cmd.assert().success().stdout(contains("Country"));
}
