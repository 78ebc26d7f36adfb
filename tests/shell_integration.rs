use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// Binary wired to a throwaway config dir so a developer's real settings
/// never leak into a test.
fn katalog(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("katalog").unwrap();
    cmd.env("KATALOG_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn piped_add_then_list_shows_display_line() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add Dubliners James_Joyce 0987654321\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Dubliners by James_Joyce (id: 0987654321)",
        ))
        .stdout(predicates::str::contains("1 record"));
}

#[test]
fn piped_shell_prints_no_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("katalog>").not());
}

#[test]
fn remove_empties_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add Dune Frank_Herbert 0441172717\nremove 0441172717\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed record '0441172717'."))
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn removing_an_absent_identifier_is_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("remove 12345\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("No record with identifier '12345'."));
}

#[test]
fn parse_error_is_reported_and_session_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add OnlyTitle\nadd Emma Jane_Austen 1\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Malformed command: add expects <title> <author> <identifier>",
        ))
        .stdout(predicates::str::contains("Emma by Jane_Austen (id: 1)"));
}

#[test]
fn unknown_command_does_not_abort_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("frobnicate 1 2 3\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown command: frobnicate"))
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn get_fetches_a_single_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add Hamlet Shakespeare 11\nget 11\nget 99\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("\nHamlet by Shakespeare (id: 11)"))
        .stdout(predicates::str::contains("No record with identifier '99'."));
}

#[test]
fn search_filters_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin(
            "add The_Trial Franz_Kafka 1\nadd Dubliners James_Joyce 2\nsearch kafka\n",
        )
        .assert()
        .success()
        .stdout(predicates::str::contains("  The_Trial by Franz_Kafka (id: 1)"))
        .stdout(predicates::str::contains("  Dubliners").not())
        .stdout(predicates::str::contains("1 record"));
}

#[test]
fn clear_drops_every_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add A B 1\nadd C D 2\nclear\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Catalog cleared."))
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn listing_keeps_insertion_order_across_removals() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = katalog(temp_dir.path())
        .write_stdin("add First a 1\nadd Second b 2\nadd Third c 3\nremove 2\nlist\n")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("  First by a").expect("First should be listed");
    let third = stdout.find("  Third by c").expect("Third should be listed");
    assert!(first < third, "order lost: {:?}", stdout);
    assert!(!stdout.contains("  Second by b"));
}

#[test]
fn quit_stops_consuming_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .write_stdin("add A B 1\nquit\nadd C D 2\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("(id: 1)"))
        .stdout(predicates::str::contains("(id: 2)").not());
}

#[test]
fn exec_runs_lines_from_argv() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .arg("exec")
        .arg("add Dune Frank_Herbert 0441172717")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Dune by Frank_Herbert (id: 0441172717)",
        ));
}

#[test]
fn run_executes_a_script_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("session.ktl");
    std::fs::write(
        &script,
        "# seed two records\n\nadd Emma Jane_Austen 1\nadd Persuasion Jane_Austen 2\nlist\n",
    )
    .unwrap();

    katalog(temp_dir.path())
        .arg("run")
        .arg(script.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("Emma by Jane_Austen (id: 1)"))
        .stdout(predicates::str::contains("2 records"));
}

#[test]
fn run_with_missing_script_exits_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .arg("run")
        .arg(temp_dir.path().join("nope.ktl").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicates::str::contains("IO error"));
}

#[test]
fn display_flag_overrides_the_configured_style() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .arg("--display")
        .arg("special")
        .arg("exec")
        .arg("add Dune Frank_Herbert 1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Special: Dune by Frank_Herbert (id: 1)",
        ));
}

#[test]
fn config_set_persists_and_shapes_later_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Persist the style
    katalog(temp_dir.path())
        .arg("config")
        .arg("display")
        .arg("special")
        .assert()
        .success()
        .stdout(predicates::str::contains("display = special"));

    // A later invocation against the same config dir picks it up
    katalog(temp_dir.path())
        .write_stdin("add Emma Jane_Austen 1\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Special: Emma by Jane_Austen (id: 1)"));

    // And `config` with no args reports it
    katalog(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("display = special"));
}

#[test]
fn config_rejects_an_unknown_style() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .arg("config")
        .arg("display")
        .arg("fancy")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown display style"));
}

#[test]
fn verbose_echoes_each_line() {
    let temp_dir = tempfile::tempdir().unwrap();

    katalog(temp_dir.path())
        .arg("-v")
        .write_stdin("add A B 1\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("> add A B 1"));
}
