// SPDX-License-Identifier: Apache-2.0

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineErrorCode {
    /// A collaborator fetch failed; all-or-nothing computations surface this.
    SourceUnavailable,
    /// Rejected before any fetch was attempted.
    InvalidInput,
    /// A referenced record does not exist.
    NotFound,
    Internal,
}

impl EngineErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceUnavailable => "source_unavailable",
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub code: EngineErrorCode,
    pub message: String,
}

impl EngineError {
    #[must_use]
    pub fn new(code: EngineErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::SourceUnavailable, message)
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::InvalidInput, message)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::NotFound, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::Internal, message)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_stable_strings() {
        assert_eq!(EngineErrorCode::SourceUnavailable.as_str(), "source_unavailable");
        assert_eq!(EngineErrorCode::InvalidInput.as_str(), "invalid_input");
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = EngineError::source_unavailable("weather upstream timed out");
        let rendered = err.to_string();
        assert!(rendered.contains("source_unavailable"));
        assert!(rendered.contains("weather upstream timed out"));
    }
}
