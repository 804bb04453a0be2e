#![forbid(unsafe_code)]

/// Errors raised while wiring the page handlers to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No element matched a required selector.
    MissingElement { selector: String },
    /// An element matched but is not of the expected kind (e.g. not an `<input>`).
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },
    /// Host-supplied configuration was rejected.
    InvalidConfig(String),
    /// A DOM call failed.
    Dom(String),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn unexpected(selector: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedElement {
            selector: selector.into(),
            expected,
        }
    }
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingElement { selector } => write!(f, "no element matches {selector}"),
            Self::UnexpectedElement { selector, expected } => {
                write!(f, "element {selector} is not {expected}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid page config: {msg}"),
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
        }
    }
}

impl std::error::Error for PageError {}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
