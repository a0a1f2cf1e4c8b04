//! Stdin commands of headless mode

use std::fmt;

use dspick_core::{CheckState, SelectableOption};

/// One line of headless input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Check the option at the index
    On(usize),
    /// Uncheck the option at the index
    Off(usize),
    /// Flip the option at the index
    Toggle(usize),
    /// Check every option
    All,
    /// Uncheck every option
    None,
    /// Print the current option list
    List,
    Quit,
}

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingIndex(&'static str),
    BadIndex(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Unknown(line) => write!(f, "Unknown command: {}", line),
            ParseError::MissingIndex(cmd) => write!(f, "'{}' needs an option index", cmd),
            ParseError::BadIndex(raw) => write!(f, "Invalid option index: {}", raw),
        }
    }
}

impl HeadlessCommand {
    /// Parse a trimmed, non-empty line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        let command = match cmd {
            "on" | "check" => HeadlessCommand::On(parse_index("on", parts.next())?),
            "off" | "uncheck" => HeadlessCommand::Off(parse_index("off", parts.next())?),
            "t" | "toggle" => HeadlessCommand::Toggle(parse_index("toggle", parts.next())?),
            "all" => HeadlessCommand::All,
            "none" => HeadlessCommand::None,
            "l" | "list" => HeadlessCommand::List,
            "q" | "quit" => HeadlessCommand::Quit,
            _ => return Err(ParseError::Unknown(line.to_string())),
        };

        if parts.next().is_some() {
            return Err(ParseError::Unknown(line.to_string()));
        }
        Ok(command)
    }

    /// The selection this command produces from `current`.
    ///
    /// `None` for commands that do not change the selection and for an
    /// index past the end of the list.
    pub fn apply(&self, current: &[SelectableOption]) -> Option<Vec<SelectableOption>> {
        let mut options = current.to_vec();
        match *self {
            HeadlessCommand::On(index) => options.get_mut(index)?.checked = CheckState::On,
            HeadlessCommand::Off(index) => options.get_mut(index)?.checked = CheckState::Off,
            HeadlessCommand::Toggle(index) => {
                let option = options.get_mut(index)?;
                option.checked = option.checked.toggled();
            }
            HeadlessCommand::All => set_all(&mut options, CheckState::On),
            HeadlessCommand::None => set_all(&mut options, CheckState::Off),
            HeadlessCommand::List | HeadlessCommand::Quit => return None,
        }
        Some(options)
    }

    /// Index the command addresses, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            HeadlessCommand::On(index)
            | HeadlessCommand::Off(index)
            | HeadlessCommand::Toggle(index) => Some(index),
            _ => None,
        }
    }
}

fn parse_index(cmd: &'static str, raw: Option<&str>) -> Result<usize, ParseError> {
    let raw = raw.ok_or(ParseError::MissingIndex(cmd))?;
    raw.parse()
        .map_err(|_| ParseError::BadIndex(raw.to_string()))
}

fn set_all(options: &mut [SelectableOption], checked: CheckState) {
    for option in options {
        option.checked = checked;
    }
}
