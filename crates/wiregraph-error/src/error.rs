//! The main Error type for wiregraph.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for all wiregraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::new(ErrorKind::ConfigInvalid, "invalid filter pattern")
            .with_operation("filter::build")
            .set_source(err)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a DiscoveryFailed error
    pub fn discovery_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DiscoveryFailed, message)
    }

    /// Create a CycleDetected error
    pub fn cycle_detected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CycleDetected, message)
    }

    /// Create an InvariantViolation error
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::DiscoveryFailed, "walk aborted");
        assert_eq!(err.kind(), ErrorKind::DiscoveryFailed);
        assert_eq!(err.message(), "walk aborted");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::InvariantViolation, "label missing")
            .with_operation("collect::node_label")
            .with_context("type_name", "app::Worker")
            .with_context("position", "2");

        assert_eq!(err.operation(), "collect::node_label");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("type_name", "app::Worker".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::DiscoveryFailed, "failed")
            .with_operation("walker::discover")
            .with_operation("collect::assemble_graph");

        assert_eq!(err.operation(), "collect::assemble_graph");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "walker::discover".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::CycleDetected, "root reaches itself")
            .with_operation("walker::discover")
            .with_context("root", "app::Server");

        let display = format!("{}", err);
        assert!(display.contains("CycleDetected"));
        assert!(display.contains("walker::discover"));
        assert!(display.contains("root: app::Server"));
        assert!(display.contains("root reaches itself"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::invariant_violation("no resolvable type name");
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);

        let err = Error::config_invalid("bad pattern");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = Error::discovery_failed("gave up");
        assert_eq!(err.kind(), ErrorKind::DiscoveryFailed);
    }

    #[test]
    fn test_set_source() {
        let io_err = std::io::Error::other("boom");
        let err = Error::new(ErrorKind::Unexpected, "wrapped").set_source(io_err);

        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: Error = regex_err.into();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.source_ref().is_some());
    }
}
