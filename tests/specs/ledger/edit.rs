//! Ledger edit specs
//!
//! Verify change and remove keep ids, order and file size consistent.

use crate::prelude::*;

fn ledger_with(temp: &Project, descriptions: &[&str]) {
    temp.ledger().args(&["create", "acct.dat"]).passes();
    for (i, description) in descriptions.iter().enumerate() {
        temp.ledger()
            .args(&["add", "acct.dat", &(i + 1).to_string(), description])
            .passes();
    }
}

#[test]
fn change_rewrites_in_place() {
    let temp = Project::empty();
    ledger_with(&temp, &["rent", "food", "fuel"]);

    temp.ledger()
        .args(&["change", "acct.dat", "1", "-9.75", "takeout"])
        .passes()
        .stdout_eq("Changed event 1\n");

    temp.ledger()
        .args(&["read", "acct.dat", "1"])
        .passes()
        .stdout_has("-9.75")
        .stdout_has("\"takeout\"");
    assert_eq!(temp.file_len("acct.dat"), 3 * RECORD_SIZE);
}

#[test]
fn change_truncates_long_description() {
    let temp = Project::empty();
    ledger_with(&temp, &["rent"]);
    let long = "z".repeat(90);

    temp.ledger()
        .args(&["change", "acct.dat", "0", "1", &long])
        .passes();

    temp.ledger()
        .args(&["read", "acct.dat", "0"])
        .passes()
        .stdout_has(&format!("\"{}\"", "z".repeat(63)));
}

#[test]
fn remove_middle_keeps_order() {
    let temp = Project::empty();
    ledger_with(&temp, &["a", "b", "c", "d"]);

    temp.ledger()
        .args(&["remove", "acct.dat", "1"])
        .passes();
    assert_eq!(temp.file_len("acct.dat"), 3 * RECORD_SIZE);

    let run = temp.ledger().args(&["readall", "acct.dat"]).passes();
    let ids: Vec<&str> = run
        .stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["0", "2", "3"]);

    temp.ledger()
        .args(&["verify", "acct.dat"])
        .passes()
        .stdout_has("(ok)");
}

#[test]
fn ids_continue_after_removals() {
    let temp = Project::empty();
    ledger_with(&temp, &["a", "b", "c"]);
    temp.ledger().args(&["remove", "acct.dat", "0"]).passes();

    temp.ledger()
        .args(&["add", "acct.dat", "4", "d"])
        .passes()
        .stdout_eq("Added event 3\n");
}

#[test]
fn remove_unknown_id_changes_nothing() {
    let temp = Project::empty();
    ledger_with(&temp, &["a"]);

    temp.ledger()
        .args(&["remove", "acct.dat", "42"])
        .fails()
        .stderr_has("remove event 42 failed on acct.dat");
    assert_eq!(temp.file_len("acct.dat"), RECORD_SIZE);
}

#[test]
fn descriptions_may_look_like_options() {
    let temp = Project::empty();
    ledger_with(&temp, &["-h", "-v"]);

    temp.ledger()
        .args(&["read", "acct.dat", "0"])
        .passes()
        .stdout_has("\"-h\"");
    temp.ledger()
        .args(&["read", "acct.dat", "1"])
        .passes()
        .stdout_has("\"-v\"");

    temp.ledger()
        .args(&["change", "acct.dat", "1", "2", "--format"])
        .passes();
    temp.ledger()
        .args(&["read", "acct.dat", "1"])
        .passes()
        .stdout_has("\"--format\"");
    assert_eq!(temp.file_len("acct.dat"), 2 * RECORD_SIZE);
}
