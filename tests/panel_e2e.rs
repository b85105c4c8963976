use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn desk_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("userdesk").unwrap();
    cmd.env("USERDESK_DATA_DIR", data_dir.path().as_os_str());
    cmd
}

#[test]
fn create_then_list_shows_the_record() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set name Alice\nset email a@b.com\ncreate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready."))
        .stdout(predicate::str::contains("Created user #1."))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn records_persist_across_sessions() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set name Alice\nset email a@b.com\ncreate\nquit\n")
        .assert()
        .success();

    desk_cmd(&dir)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Page 1 of 1 (1 record)"));
}

#[test]
fn validation_blocks_a_create_without_a_name() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set email a@b.com\ncreate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name is required."))
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn validation_blocks_a_malformed_email() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set name Alice\nset email nope\ncreate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A valid email address is required."));
}

#[test]
fn save_requires_an_id() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set name Alice\nset email a@b.com\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the ID to save."));
}

#[test]
fn load_reports_a_missing_record() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("load 9999\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User #9999 not found."));
}

#[test]
fn delete_asks_for_confirmation_and_honors_a_decline() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("set name Alice\nset email a@b.com\ncreate\nquit\n")
        .assert()
        .success();

    // declined: the record stays
    desk_cmd(&dir)
        .write_stdin("id 1\ndelete\nn\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete user #1?"))
        .stdout(predicate::str::contains("Deleted").not())
        .stdout(predicate::str::contains("Alice"));

    // confirmed: the record goes
    desk_cmd(&dir)
        .write_stdin("id 1\ndelete\ny\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted user #1."))
        .stdout(predicate::str::contains("No records."));
}

#[test]
fn deleting_the_last_record_of_the_last_page_steps_back() {
    let dir = TempDir::new().unwrap();

    let mut script = String::new();
    for i in 1..=11 {
        script.push_str(&format!(
            "set name User{i}\nset email u{i}@x.com\ncreate\n"
        ));
    }
    // eleven records means two pages at the default page size
    script.push_str("next\nid 11\ndelete\ny\nquit\n");

    desk_cmd(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2 (11 records)"))
        .stdout(predicate::str::contains("Deleted user #11."))
        .stdout(predicate::str::contains("Page 1 of 1 (10 records)"));
}

#[test]
fn changing_the_page_size_resets_to_the_first_page() {
    let dir = TempDir::new().unwrap();

    let mut script = String::new();
    for i in 1..=7 {
        script.push_str(&format!(
            "set name User{i}\nset email u{i}@x.com\ncreate\n"
        ));
    }
    script.push_str("pagesize 3\nquit\n");

    desk_cmd(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3 (7 records)"));
}

#[test]
fn unknown_commands_point_at_help() {
    let dir = TempDir::new().unwrap();

    desk_cmd(&dir)
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate."));
}
