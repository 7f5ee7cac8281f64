use thiserror::Error;

/// Result type alias using MatchError
pub type Result<T> = std::result::Result<T, MatchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Comparison itself never fails: type mismatches, unreadable members and a
/// full report are classification outcomes. The kinds below cover the
/// configuration surface and the faults that are recovered locally but still
/// need a stable code when they are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// Options failed validation
    InvalidOptions,
    /// Options could not be decoded
    OptionsParse,
    /// A leaf value could not be read (recovered as `Value::Unavailable`)
    AccessFault,
}

impl MatchErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            MatchErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
            MatchErrorKind::OptionsParse => "ERR_OPTIONS_PARSE",
            MatchErrorKind::AccessFault => "ERR_ACCESS_FAULT",
        }
    }
}

/// A member getter failed to produce a value
///
/// Getters return this instead of panicking. The engine turns it into
/// `Value::Unavailable`, which never compares equal to anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read member `{member}`: {reason}")]
pub struct AccessFault {
    member: String,
    reason: String,
}

impl AccessFault {
    pub fn new(member: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// Name of the member that could not be read
    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Error taxonomy for scenematch operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// An option value is out of range
    #[error("Invalid compare options: {reason}")]
    InvalidOptions { reason: String },

    /// Options document could not be parsed
    #[error("Failed to parse compare options: {message}")]
    OptionsParse { message: String },

    /// Leaf value access failed
    #[error(transparent)]
    AccessFault(#[from] AccessFault),
}

impl MatchError {
    /// Get the error kind
    pub fn kind(&self) -> MatchErrorKind {
        match self {
            MatchError::InvalidOptions { .. } => MatchErrorKind::InvalidOptions,
            MatchError::OptionsParse { .. } => MatchErrorKind::OptionsParse,
            MatchError::AccessFault(_) => MatchErrorKind::AccessFault,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

// ========== End Error Facility ==========

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::OptionsParse {
            message: err.to_string(),
        }
    }
}
