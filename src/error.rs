use thiserror::Error;

/// Everything a command can report back to the user. All of these are
/// recoverable: the session keeps running after the message is printed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DukeError {
    #[error("I'm sorry, I don't know what \"{0}\" means.")]
    UnknownCommand(String),

    #[error("No {0} specified.")]
    MissingParameter(&'static str),

    #[error("Cannot read \"{0}\" as a date. Please use the format \"DD-MM-YYYY [HHMM]\".")]
    InvalidDateFormat(String),

    #[error("Please ensure that both dates use the same format.")]
    InconsistentDateFormat,

    #[error("Start date cannot be after the end date.")]
    InvalidDateRange,

    #[error("There are no tasks added. Please add a task first.")]
    EmptyList,

    #[error("Task number provided \"{0}\" is not a number.")]
    NotANumber(String),

    #[error("Task number cannot be negative. Please retry with a valid task number.")]
    NegativeIndex,

    #[error("Task {index} does not exist. Use a number between 1 and {size}.")]
    OutOfRange { index: i64, size: usize },
}
