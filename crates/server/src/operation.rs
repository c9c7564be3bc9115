//! The operations the service exposes and their fixed client messages.

use std::fmt;

/// One service operation. Selects the response envelope and the messages
/// clients see on failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CheckExists,
    Update,
    Read,
    Delete,
    Create,
    Health,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckExists => "check_exists",
            Self::Update => "update",
            Self::Read => "read",
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Health => "health",
        }
    }

    /// Whether response bodies carry a `success` flag. Create replies with a
    /// bare `{message}`.
    pub fn reports_success(self) -> bool {
        !matches!(self, Self::Create)
    }

    /// Client message for a store failure.
    pub fn server_error_message(self) -> &'static str {
        match self {
            Self::CheckExists | Self::Update => "Server error! Try again.",
            Self::Read => "Server error",
            Self::Delete => "Server error. Try again!",
            Self::Create => "Database error. Please try again.",
            Self::Health => "Store unavailable",
        }
    }

    /// Client message for a missing or empty required field.
    pub fn missing_fields_message(self) -> &'static str {
        match self {
            Self::Update => "All fields are required for update!",
            Self::Create => "All fields are required!",
            _ => "Name is required!",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
