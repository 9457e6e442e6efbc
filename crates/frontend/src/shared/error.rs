use std::fmt;

/// Error split the UI cares about: validation never reached the network and
/// renders inline; transport failures render as dismissible messages near the
/// triggering control and are never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    Validation(String),
    Transport(String),
}

impl UiError {
    pub fn transport(detail: impl fmt::Display) -> Self {
        UiError::Transport(detail.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            UiError::Validation(m) | UiError::Transport(m) => m,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, UiError::Validation(_))
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type UiResult<T> = Result<T, UiError>;
