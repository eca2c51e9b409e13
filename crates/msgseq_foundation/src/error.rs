//! Error types for the msgseq system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only throwing entry points build an [`Error`]; the non-throwing accessors
//! (`try_parse`, `as_*`) report failure with `None` instead.

use std::fmt;

use thiserror::Error;

/// Result type alias for msgseq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for msgseq operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a format error for text that the `target` parser rejected.
    #[must_use]
    pub fn format(target: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format {
            target: target.into(),
            input: input.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a document structure error at the given 1-based line.
    #[must_use]
    pub fn structure(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Structure {
            line,
            message: message.into(),
        })
    }

    /// Returns true if this is a format error.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Format { .. })
    }

    /// Returns true if this is an invalid name error.
    #[must_use]
    pub const fn is_invalid_name(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidName { .. })
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Malformed or out-of-range text handed to a parser.
    #[error("cannot parse {input:?} as {target}")]
    Format {
        /// Name of the grammar that rejected the input.
        target: String,
        /// The rejected text.
        input: String,
    },

    /// An argument violates a structural invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A name failed the identifier grammar or collided where uniqueness is required.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// Malformed document structure.
    #[error("structure error at line {line}: {message}")]
    Structure {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source document name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Enclosing sections or records, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
