//! Events reaching the UI loop and the table commands parsed from input.

use std::str::FromStr;

use shared::domain::{Member, MemberField, MemberId, UnknownField};
use thiserror::Error;

pub enum UiEvent {
    Input(String),
    InputClosed,
    MembersLoaded(Vec<Member>),
    LoadFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Updates the search box without filtering.
    Type(String),
    /// Confirms the typed search term.
    Enter,
    Search(String),
    Page(usize),
    First,
    Previous,
    Next,
    Last,
    Select(MemberId),
    SelectAll,
    Edit(MemberId),
    Set {
        id: MemberId,
        field: MemberField,
        value: String,
    },
    Save(MemberId),
    Cancel(MemberId),
    Delete(MemberId),
    DeleteSelected,
    Reload,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid page number '{0}'")]
    InvalidPage(String),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub const HELP: &str = "\
commands:
  type <text>               edit the search box (not applied yet)
  enter                     apply the search box
  search <text>             type and apply in one step
  page <n> | first | prev | next | last
  select <id>               toggle one row
  select-all                toggle every row on this page
  edit <id>                 start editing a row
  set <id> <field> <value>  stage a name/email/role change
  save <id> | cancel <id>
  delete <id> | delete-selected
  reload                    fetch the member list again
  show | help | quit";

impl FromStr for TableCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "type" => TableCommand::Type(rest.to_string()),
            "enter" => TableCommand::Enter,
            "search" | "/" => TableCommand::Search(rest.to_string()),
            "page" => {
                let raw = required(rest, "page", "a page number")?;
                let page = raw
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidPage(raw.to_string()))?;
                TableCommand::Page(page)
            }
            "first" => TableCommand::First,
            "prev" | "previous" => TableCommand::Previous,
            "next" => TableCommand::Next,
            "last" => TableCommand::Last,
            "select" => TableCommand::Select(member_id(rest, "select")?),
            "select-all" => TableCommand::SelectAll,
            "edit" => TableCommand::Edit(member_id(rest, "edit")?),
            "set" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let id = member_id(parts.next().unwrap_or_default(), "set")?;
                let field = required(parts.next().unwrap_or_default(), "set", "a field")?
                    .parse::<MemberField>()?;
                let value = parts.next().unwrap_or_default().trim().to_string();
                TableCommand::Set { id, field, value }
            }
            "save" => TableCommand::Save(member_id(rest, "save")?),
            "cancel" => TableCommand::Cancel(member_id(rest, "cancel")?),
            "delete" => TableCommand::Delete(member_id(rest, "delete")?),
            "delete-selected" => TableCommand::DeleteSelected,
            "reload" => TableCommand::Reload,
            "show" | "ls" => TableCommand::Show,
            "help" | "?" => TableCommand::Help,
            "quit" | "exit" | "q" => TableCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required<'a>(
    raw: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(raw)
}

fn member_id(raw: &str, command: &'static str) -> Result<MemberId, CommandError> {
    required(raw, command, "a member id").map(MemberId::from)
}
