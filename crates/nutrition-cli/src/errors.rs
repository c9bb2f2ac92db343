//! CLI error kinds and their process exit codes.

use std::fmt;

use nutrition_core::LedgerError;

use crate::ui::{print_error, UiContext};

/// Exit code for a missing entry.
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code for rejected input.
pub const EXIT_VALIDATION: i32 = 2;
/// Exit code for everything else.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Failure,
}

impl ErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound => EXIT_NOT_FOUND,
            Self::Validation => EXIT_VALIDATION,
            Self::Failure => EXIT_FAILURE,
        }
    }
}

/// An error ready to be printed with an optional hint.
#[derive(Debug)]
pub struct CliError {
    pub kind: ErrorKind,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Classify an error bubbled up from a handler.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<CliError>() {
            Ok(cli_error) => return cli_error,
            Err(err) => err,
        };
        let kind = match err.downcast_ref::<LedgerError>() {
            Some(LedgerError::NotFound(_)) => ErrorKind::NotFound,
            Some(LedgerError::Validation(_)) => ErrorKind::Validation,
            _ => ErrorKind::Failure,
        };
        let hint = match kind {
            ErrorKind::NotFound => Some("Run `calories list` to find entry IDs.".to_string()),
            _ => None,
        };
        Self {
            kind,
            message: err.to_string(),
            hint,
        }
    }

    /// Print to stderr and terminate with this error's exit code.
    pub fn exit(self) -> ! {
        let ctx = UiContext::for_stderr();
        print_error(&ctx, &self.message, self.hint.as_deref());
        std::process::exit(self.kind.exit_code());
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
