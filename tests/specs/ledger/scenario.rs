//! Ledger lifecycle specs
//!
//! Create, add, balance, remove and list a ledger end to end.

use crate::prelude::*;

#[test]
fn paycheck_groceries_scenario() {
    let temp = Project::empty();

    temp.ledger()
        .args(&["create", "acct.dat"])
        .passes()
        .stdout_eq("Created ledger acct.dat\n");
    temp.ledger()
        .args(&["add", "acct.dat", "100", "paycheck"])
        .passes()
        .stdout_eq("Added event 0\n");
    temp.ledger()
        .args(&["add", "acct.dat", "-20", "groceries"])
        .passes()
        .stdout_eq("Added event 1\n");

    temp.ledger()
        .args(&["balance", "acct.dat"])
        .passes()
        .stdout_eq("80\n");

    temp.ledger()
        .args(&["remove", "acct.dat", "0"])
        .passes()
        .stdout_eq("Removed event 0\n");

    temp.ledger()
        .args(&["balance", "acct.dat"])
        .passes()
        .stdout_eq("-20\n");

    let run = temp
        .ledger()
        .args(&["readall", "acct.dat"])
        .passes()
        .stdout_has("groceries")
        .stdout_lacks("paycheck");
    // Header plus one event
    assert_eq!(run.stdout_lines(), 2);
    assert!(run.stdout.lines().nth(1).unwrap().starts_with("1 "));
}

#[test]
fn create_twice_fails_and_keeps_data() {
    let temp = Project::empty();
    temp.ledger().args(&["create", "acct.dat"]).passes();
    temp.ledger()
        .args(&["add", "acct.dat", "3", "x"])
        .passes();

    temp.ledger()
        .args(&["create", "acct.dat"])
        .fails()
        .stderr_has("already exists");
    assert_eq!(temp.file_len("acct.dat"), RECORD_SIZE);
}

#[test]
fn balance_of_mixed_amounts() {
    let temp = Project::empty();
    temp.ledger().args(&["create", "acct.dat"]).passes();
    for (amount, description) in [("5", "a"), ("-3", "b"), ("2.5", "c")] {
        temp.ledger()
            .args(&["add", "acct.dat", amount, description])
            .passes();
    }

    temp.ledger()
        .args(&["balance", "acct.dat"])
        .passes()
        .stdout_eq("4.5\n");
}

#[test]
fn empty_ledger_lists_nothing() {
    let temp = Project::empty();
    temp.ledger().args(&["create", "acct.dat"]).passes();

    temp.ledger()
        .args(&["readall", "acct.dat"])
        .passes()
        .stdout_eq("No events\n");
    temp.ledger()
        .args(&["balance", "acct.dat"])
        .passes()
        .stdout_eq("0\n");
}
