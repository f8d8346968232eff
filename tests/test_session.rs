//! Integration tests for interactive sessions.
//!
//! Each test feeds a scripted conversation through `Session::run` and
//! checks both the replies and what ends up persisted.

mod mocks;

use chrono::NaiveDate;
use contact_book::models::{AddressBook, Record};
use contact_book::storage::{AddressBookStore, JsonFileStore};
use contact_book::Session;
use mocks::MockStore;
use std::io::{self, Cursor, Write};
use tempfile::TempDir;

const PROMPT: &str = "Enter a command: ";

fn march_14() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
}

/// Run a scripted conversation and return the reply to each prompt.
fn converse<S: AddressBookStore>(session: &mut Session<S>, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    session
        .run(Cursor::new(script.to_string()), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    output
        .split(PROMPT)
        .skip(1)
        .map(|reply| reply.trim_end_matches('\n').to_string())
        .collect()
}

fn session(store: MockStore) -> Session<MockStore> {
    Session::new(store, 7).with_clock(march_14)
}

#[test]
fn test_greets_before_first_prompt() {
    let mut session = session(MockStore::new());
    let mut output = Vec::new();
    session.run(Cursor::new("exit\n"), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Welcome to the assistant bot!\nEnter a command: "));
}

#[test]
fn test_add_update_and_show_phones() {
    let mut session = session(MockStore::new());

    let replies = converse(
        &mut session,
        "add Alice 0123456789\nadd Alice 9876543210\nphone Alice\nexit\n",
    );
    assert_eq!(
        replies,
        vec![
            "Contact added.",
            "Contact updated.",
            "0123456789; 9876543210",
            "Good bye!",
        ]
    );

    let store = session.store();
    let saved = store.saved().unwrap();
    assert_eq!(
        saved.find("Alice").unwrap().phones_display(),
        "0123456789; 9876543210"
    );
    assert_eq!(store.get_call_count("load"), 1);
    assert_eq!(store.get_call_count("save"), 1);
}

#[test]
fn test_upcoming_birthdays_with_fixed_today() {
    let mut session = session(MockStore::new());

    let replies = converse(
        &mut session,
        "add Bob 0123456789\n\
         add-birthday Bob 15.03.1990\n\
         add Sue 1111111111\n\
         add-birthday Sue 16.03.1985\n\
         birthdays\n\
         close\n",
    );
    assert_eq!(
        replies[4],
        "User Bob has a birthday this week! 2024.03.15\n\
         User Sue has a birthday this week! 2024.03.18"
    );
}

#[test]
fn test_no_upcoming_birthdays() {
    let mut session = session(MockStore::new());
    let replies = converse(&mut session, "birthdays\nexit\n");
    assert_eq!(replies[0], "There are no upcoming birthdays.");
}

#[test]
fn test_errors_do_not_end_session() {
    let mut session = session(MockStore::new());

    let replies = converse(
        &mut session,
        "change Ghost 0123456789\n\
         add Alice 12345\n\
         add Alice\n\
         show-birthday\n\
         dance\n\
         add Alice 0123456789\n\
         show-birthday Alice\n\
         add-birthday Alice 31.02.1990\n\
         exit\n",
    );
    assert_eq!(
        replies,
        vec![
            "Enter user name.",
            "Invalid phone number format.",
            "Please provide both name and phone number.",
            "Please provide the name.",
            "Invalid command.",
            "Contact added.",
            "Birthday not set.",
            "Invalid date format. Use DD.MM.YYYY",
            "Good bye!",
        ]
    );
    assert_eq!(session.book().len(), 1);
}

#[test]
fn test_blank_lines_are_ignored() {
    let mut session = session(MockStore::new());
    let replies = converse(&mut session, "\n   \nhello\nexit\n");
    assert_eq!(replies, vec!["", "", "How can I help you?", "Good bye!"]);
}

#[test]
fn test_lines_after_exit_are_not_read() {
    let mut session = session(MockStore::new());
    converse(&mut session, "exit\nadd Alice 0123456789\n");
    assert!(session.store().saved().unwrap().is_empty());
}

#[test]
fn test_undecodable_line_is_rejected_and_book_saved() {
    let mut session = session(MockStore::new());
    let mut output = Vec::new();
    let script: &[u8] = b"add Alice 0123456789\nadd Bob \xff\xfe\nphone Alice\nexit\n";

    session.run(Cursor::new(script), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let replies: Vec<&str> = output
        .split(PROMPT)
        .skip(1)
        .map(|reply| reply.trim_end_matches('\n'))
        .collect();
    assert_eq!(
        replies,
        vec!["Contact added.", "Invalid command.", "0123456789", "Good bye!"]
    );

    let store = session.store();
    assert_eq!(store.get_call_count("save"), 1);
    let saved = store.saved().unwrap();
    assert!(saved.find("Alice").is_some());
    assert!(saved.find("Bob").is_none());
}

/// Output sink that accepts `budget` bytes and then fails.
struct BrokenPipe {
    budget: usize,
}

impl Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"));
        }
        self.budget -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_failure_still_saves() {
    let mut session = session(MockStore::new());
    // Room for the greeting, two prompts and the first reply only
    let greeting = "Welcome to the assistant bot!\n".len();
    let sink = BrokenPipe {
        budget: greeting + 2 * PROMPT.len() + "Contact added.\n".len(),
    };

    let result = session.run(
        Cursor::new("add Alice 0123456789\nadd Bob 1111111111\nexit\n"),
        sink,
    );
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);

    let store = session.store();
    assert_eq!(store.get_call_count("save"), 1);
    let saved = store.saved().unwrap();
    assert!(saved.find("Alice").is_some());
    assert!(saved.find("Bob").is_some());
}

#[test]
fn test_end_of_input_saves() {
    let store = MockStore::new();
    let mut session = session(store.clone());

    let replies = converse(&mut session, "add Alice 0123456789");
    assert_eq!(replies, vec!["Contact added.", ""]);
    assert_eq!(store.get_call_count("save"), 1);
    assert!(store.saved().unwrap().find("Alice").is_some());
}

#[test]
fn test_starts_from_saved_book() {
    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("0123456789").unwrap();
    bob.add_birthday("15.03.1990").unwrap();
    let book: AddressBook = [bob].into_iter().collect();

    let mut session = session(MockStore::with_book(book));
    let replies = converse(&mut session, "all\nshow-birthday Bob\nexit\n");
    assert_eq!(replies[0], "Contact name: Bob, phone: 0123456789");
    assert_eq!(replies[1], "15.03.1990");
}

#[test]
fn test_unreadable_store_starts_empty() {
    let store = MockStore::new();
    store.fail_loads();

    let mut session = session(store);
    assert!(session.book().is_empty());
    let replies = converse(&mut session, "all\nexit\n");
    assert_eq!(replies[0], "No contacts saved.");
}

#[test]
fn test_failed_save_keeps_book() {
    let store = MockStore::new();
    store.fail_saves();

    let mut session = session(store.clone());
    let replies = converse(&mut session, "add Alice 0123456789\nexit\n");
    assert_eq!(replies.last().unwrap(), "Good bye!");
    assert_eq!(store.get_call_count("save"), 1);
    assert!(store.saved().is_none());
    assert!(session.book().find("Alice").is_some());
}

#[test]
fn test_book_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut first = Session::new(JsonFileStore::new(&path), 7).with_clock(march_14);
    converse(
        &mut first,
        "add Zoe 0123456789\n\
         add Adam 1111111111\n\
         add Adam 2222222222\n\
         add-birthday Adam 17.03.1991\n\
         exit\n",
    );

    let mut second = Session::new(JsonFileStore::new(&path), 7).with_clock(march_14);
    let replies = converse(&mut second, "all\nbirthdays\nexit\n");
    assert_eq!(
        replies[0],
        "Contact name: Zoe, phone: 0123456789\n\
         Contact name: Adam, phone: 1111111111; 2222222222"
    );
    assert_eq!(replies[1], "User Adam has a birthday this week! 2024.03.18");
}

#[test]
fn test_configured_horizon_applies() {
    let mut session = Session::new(MockStore::new(), 30).with_clock(march_14);
    let replies = converse(
        &mut session,
        "add Max 0123456789\nadd-birthday Max 01.04.1992\nbirthdays\nbirthdays 7\nexit\n",
    );
    assert_eq!(replies[2], "User Max has a birthday this week! 2024.04.01");
    assert_eq!(replies[3], "There are no upcoming birthdays.");
}
