//! HTML fragments produced for markup-consuming hosts

use core::fmt::{Display, Formatter, Result as FmtResult};

/// Rendered HTML content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Html {
    /// Raw HTML string
    pub content: String,
}

impl Html {
    /// Create HTML from a string
    #[inline]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl From<String> for Html {
    #[inline]
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<&str> for Html {
    #[inline]
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl Display for Html {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.content)
    }
}
