use std::fmt::{self, Display};

use crate::cursor::InputPosition;

/// Error returned when the input violates the JSON grammar.
///
/// Formatting is whole-or-nothing: the first violation aborts the call
/// and becomes this error. No partial output is ever returned.
#[derive(Debug, Clone)]
pub struct TidyJsonError {
    pub message: String,
    pub input_position: Option<InputPosition>,
}

impl TidyJsonError {
    pub fn new(message: impl Into<String>, pos: Option<InputPosition>) -> Self {
        let message = message.into();
        let message = if let Some(p) = pos {
            format!("{} at idx={}, row={}, col={}", message, p.index, p.row, p.column)
        } else {
            message
        };
        Self { message, input_position: pos }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for TidyJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TidyJsonError {}
