//! The set of command words and their usage text.

use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::RemovePhone,
        Command::Delete,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Help,
        Command::Exit,
    ];

    /// The word that invokes the command.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }

    /// One-line usage shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello - greet the assistant",
            Command::Help => "help - list commands",
            Command::Add => "add NAME PHONE - add a contact or another phone",
            Command::Change => "change NAME PHONE - replace the contact's first phone",
            Command::Phone => "phone NAME - show the contact's phones",
            Command::RemovePhone => "remove-phone NAME PHONE - remove a phone",
            Command::Delete => "delete NAME - delete a contact",
            Command::All => "all - show every contact",
            Command::AddBirthday => "add-birthday NAME DD.MM.YYYY - set a birthday",
            Command::ShowBirthday => "show-birthday NAME - show a birthday",
            Command::Birthdays => "birthdays [DAYS] - birthdays coming up",
            Command::Exit => "exit | close - save and quit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
