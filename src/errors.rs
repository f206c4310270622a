//! Error type with diagnostic codes using miette
//!
//! Every failure names the type and operation that raised it, a message, and
//! an ordered context payload echoing the offending values.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The three failure kinds of the taxonomy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Access to a component the value's kind does not declare
    Undefined,
    /// Wrong kind of argument: non-finite number, unknown unit token,
    /// unreadable file, degenerate container
    Unsuited,
    /// Cross-kind mismatch. Reserved, nothing raises it yet.
    Uncompatible,
}

impl ErrorKind {
    /// Numeric code of the kind (1, 2, 3)
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::Undefined => 1,
            ErrorKind::Unsuited => 2,
            ErrorKind::Uncompatible => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Undefined => "undefined",
            ErrorKind::Unsuited => "unsuited",
            ErrorKind::Uncompatible => "uncompatible",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure raised by one of the value types
#[derive(Error, Debug)]
#[error("{type_name}::{operation}: {message}")]
pub struct Error {
    kind: ErrorKind,
    type_name: &'static str,
    operation: &'static str,
    message: String,
    context: Vec<(&'static str, String)>,
    #[source]
    source: Option<BoxedSource>,
}

impl Error {
    pub fn new(
        kind: ErrorKind,
        type_name: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name,
            operation,
            message: message.into(),
            context: Vec::new(),
            source: None,
        }
    }

    pub fn undefined(
        type_name: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Undefined, type_name, operation, message)
    }

    pub fn unsuited(
        type_name: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Unsuited, type_name, operation, message)
    }

    pub fn uncompatible(
        type_name: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Uncompatible, type_name, operation, message)
    }

    /// Attach a context entry, rendered with `Debug`
    pub fn with_context(mut self, key: &'static str, value: impl fmt::Debug) -> Self {
        self.context.push((key, format!("{value:?}")));
        self
    }

    /// Wrap a failure coming from outside the crate as [`ErrorKind::Unsuited`].
    ///
    /// The foreign error's type name and message end up in the context (plus
    /// `errno` for OS-level I/O errors) and the error itself stays reachable
    /// through `source()`.
    pub fn from_foreign<E>(type_name: &'static str, operation: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut error = Self::unsuited(type_name, operation, format!("Foreign failure: {err}"))
            .with_context("class", std::any::type_name::<E>());
        let errno = (&err as &(dyn std::error::Error + 'static))
            .downcast_ref::<std::io::Error>()
            .and_then(std::io::Error::raw_os_error);
        if let Some(errno) = errno {
            error = error.with_context("errno", errno);
        }
        error = error.with_context("error", err.to_string());
        error.source = Some(Box::new(err));
        error
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Look up a single context entry by key
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("urithmetic::{}", self.kind)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.context.is_empty() {
            return None;
        }
        let rendered: Vec<String> = self
            .context
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        Some(Box::new(rendered.join(", ")))
    }
}
