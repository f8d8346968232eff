//! One handler per command.
//!
//! Handlers validate their arguments, work on the book, and return the
//! reply text. Errors are left to the dispatcher.

use super::{Command, CommandContext, Reply};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

const NAME_AND_PHONE: &str = "Please provide both name and phone number.";
const NAME_AND_NEW_PHONE: &str = "Please provide both name and new phone number.";
const NAME_ONLY: &str = "Please provide the name.";
const NAME_AND_BIRTHDAY: &str = "Please provide both name and birthday.";

pub(super) fn execute(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<Reply> {
    let text = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => help(),
        Command::Add => add_contact(args, book)?,
        Command::Change => change_contact(args, book)?,
        Command::Phone => show_phones(args, book)?,
        Command::RemovePhone => remove_phone(args, book)?,
        Command::Delete => delete_contact(args, book)?,
        Command::All => show_all(book),
        Command::AddBirthday => add_birthday(args, book)?,
        Command::ShowBirthday => show_birthday(args, book)?,
        Command::Birthdays => birthdays(args, book, ctx)?,
        Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
    };
    Ok(Reply::Message(text))
}

fn arg<'a>(args: &[&'a str], index: usize, prompt: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::MissingArgument(prompt))
}

fn existing<'b>(book: &'b AddressBook, name: &str) -> CommandResult<&'b Record> {
    book.find(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))
}

fn existing_mut<'b>(book: &'b mut AddressBook, name: &str) -> CommandResult<&'b mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))
}

fn help() -> String {
    Command::ALL
        .iter()
        .map(|command| command.usage())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_AND_PHONE)?;
    let phone = arg(args, 1, NAME_AND_PHONE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Built fully before insertion so a bad phone adds nothing
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_AND_NEW_PHONE)?;
    let new_phone = arg(args, 1, NAME_AND_NEW_PHONE)?;
    existing_mut(book, name)?.edit_phone(new_phone)?;
    Ok("Contact updated.".to_string())
}

fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_ONLY)?;
    Ok(existing(book, name)?.phones_display())
}

fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_AND_PHONE)?;
    let phone = arg(args, 1, NAME_AND_PHONE)?;
    existing_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_ONLY)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.records()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_AND_BIRTHDAY)?;
    let birthday = arg(args, 1, NAME_AND_BIRTHDAY)?;
    existing_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, NAME_ONLY)?;
    Ok(match existing(book, name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set.".to_string(),
    })
}

fn birthdays(args: &[&str], book: &AddressBook, ctx: &CommandContext) -> CommandResult<String> {
    let horizon_days = match args.first() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| CommandError::InvalidArgument(format!("Invalid number of days: {}", raw)))?,
        None => ctx.horizon_days,
    };

    let upcoming = book.upcoming_birthdays(ctx.today, horizon_days);
    if upcoming.is_empty() {
        return Ok("There are no upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
