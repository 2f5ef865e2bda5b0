use std::fmt;

/// Failure kind of a single conversion.
///
/// Everything except [`ErrorKind::Other`] is recognized by the dispatch core:
/// the failure is reported to the observer and the default value is returned.
/// `Other` is never swallowed and reaches the caller as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value (or a required argument) is absent, `DbNull` or a blank string.
    ArgumentNull,
    /// String does not parse as the requested type.
    Format,
    /// Numeric value lies outside the target range.
    Overflow,
    /// No conversion path exists, or NaN was cast to an integer.
    InvalidCast,
    /// Malformed argument, e.g. a value that is not a member of the target enum.
    InvalidArgument,
    /// Operation not supported for this combination of types.
    InvalidOperation,
    /// Unrecognized failure. Propagated, never replaced by the default.
    Other,
}

impl ErrorKind {
    /// Whether dispatch may swallow this kind and fall back to the default.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, ErrorKind::Other)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ArgumentNull => "argument null",
            ErrorKind::Format => "format",
            ErrorKind::Overflow => "overflow",
            ErrorKind::InvalidCast => "invalid cast",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Conversion error, returned by converters and passed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ConversionError {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    pub fn argument_null(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArgumentNull, msg)
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, msg)
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Overflow, msg)
    }

    pub fn invalid_cast(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCast, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOperation, msg)
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, msg)
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConversionError {}

// ---------------------------------------------------------------------------
// From impls: standard parse errors → ConversionError with correct ErrorKind
// ---------------------------------------------------------------------------

impl From<std::char::CharTryFromError> for ConversionError {
    fn from(e: std::char::CharTryFromError) -> Self {
        Self::overflow(e.to_string())
    }
}

impl From<uuid::Error> for ConversionError {
    fn from(e: uuid::Error) -> Self {
        Self::format(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_other_is_unrecoverable() {
        assert!(ConversionError::format("x").is_recoverable());
        assert!(ConversionError::invalid_operation("x").is_recoverable());
        assert!(!ConversionError::other("x").is_recoverable());
    }

    #[test]
    fn context_keeps_kind() {
        let err = ConversionError::overflow("too big").with_context("f64 -> i32");
        assert_eq!(err.kind, ErrorKind::Overflow);
        assert_eq!(err.to_string(), "overflow: f64 -> i32: too big");
    }
}
