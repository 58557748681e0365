use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Errors surfaced by the string-facing navigation entry points and the
/// single-writer task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavError {
    /// The token is not one of the known section identifiers.
    UnknownSection(String),
    /// No navigation button carries this label.
    UnknownLabel(String),
    /// The single-writer task has shut down.
    ControllerGone,
}

impl Display for NavError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownSection(token) => write!(formatter, "unknown section id '{token}'"),
            Self::UnknownLabel(label) => write!(formatter, "unknown navigation label '{label}'"),
            Self::ControllerGone => write!(formatter, "navigation task is no longer running"),
        }
    }
}

impl Error for NavError {}
