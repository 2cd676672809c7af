//! Command-script language: one command per line, whitespace-separated,
//! only the first two tokens are meaningful.

use crate::errors::{ScriptError, ScriptResult};

/// A single parsed script command. Keywords are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddSet(String),
    AddPhoto(String),
    Remove(String),
    Find(String),
    Display,
    Quit,
}

/// Parse one script line into a [`Command`].
///
/// `line_no` is 1-based and only used for diagnostics. Blank lines,
/// unknown keywords and missing parameters are recoverable errors; the
/// caller decides whether to warn and continue or abort.
pub fn parse_line(line: &str, line_no: usize) -> ScriptResult<Command> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens
        .next()
        .ok_or(ScriptError::BlankLine { line: line_no })?;
    let parameter = tokens.next();

    let with_name = |command: &'static str| -> ScriptResult<String> {
        parameter
            .map(str::to_string)
            .ok_or(ScriptError::MissingParameter {
                line: line_no,
                command,
            })
    };

    match keyword {
        "AddSet" => Ok(Command::AddSet(with_name("AddSet")?)),
        "AddPhoto" => Ok(Command::AddPhoto(with_name("AddPhoto")?)),
        "Remove" => Ok(Command::Remove(with_name("Remove")?)),
        "Find" => Ok(Command::Find(with_name("Find")?)),
        "Display" => Ok(Command::Display),
        "Quit" => Ok(Command::Quit),
        other => Err(ScriptError::UnknownCommand {
            line: line_no,
            token: other.to_string(),
        }),
    }
}
