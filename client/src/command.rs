use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Enter a cell number 1-9, r to reset, h for help or q to quit")]
    Empty,

    #[error("There is no cell 0, cells are numbered 1-9")]
    ZeroCell,

    #[error("Unknown command: {0}")]
    Unknown(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }

    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(Command::Reset),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(0) => Err(CommandError::ZeroCell),
        Ok(number) => Ok(Command::Place(number - 1)),
        Err(_) => Err(CommandError::Unknown(input.to_string())),
    }
}
