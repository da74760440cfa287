use std::error::Error as StdError;
use std::fmt;

/// The underlying failure wrapped by a [`NamedError`].
///
/// A cause is either a message built from a format template, or an error value
/// that was already constructed elsewhere and is carried as-is.
pub enum Cause {
    Message(String),
    Source(Box<dyn StdError + Send + Sync + 'static>),
}

impl Cause {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    pub fn source_error(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Source(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            Self::Source(err) => f.debug_tuple("Source").field(err).finish(),
        }
    }
}

impl From<String> for Cause {
    fn from(msg: String) -> Self {
        Self::Message(msg)
    }
}

impl From<&str> for Cause {
    fn from(msg: &str) -> Self {
        Self::Message(msg.to_owned())
    }
}

impl From<fmt::Arguments<'_>> for Cause {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::Message(args.to_string())
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Cause {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Source(err)
    }
}

impl From<serde_json::Error> for Cause {
    fn from(err: serde_json::Error) -> Self {
        Self::source_error(err)
    }
}

impl From<crate::Error> for Cause {
    fn from(err: crate::Error) -> Self {
        Self::source_error(err)
    }
}

/// A failure tagged with the field path it occurred at.
///
/// Renders as `'<name>': <cause>`. The name may be empty for failures that
/// have no field identity. Only a [`Cause::Source`] shows up in the
/// [`source`](StdError::source) chain.
#[derive(Debug)]
pub struct NamedError {
    name: String,
    cause: Cause,
}

impl fmt::Display for NamedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.name, self.cause)
    }
}

impl StdError for NamedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Cause::Message(_) => None,
            Cause::Source(err) => Some(err.as_ref()),
        }
    }
}

impl NamedError {
    pub fn new(name: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
        }
    }

    /// Wraps an already constructed error without touching its message.
    pub fn from_error(name: impl Into<String>, err: impl StdError + Send + Sync + 'static) -> Self {
        Self::new(name, Cause::source_error(err))
    }

    pub fn unnamed(cause: impl Into<Cause>) -> Self {
        Self::new(String::new(), cause)
    }

    /// Prefixes the name with `parent.`, turning `field` into `parent.field`.
    /// An empty name becomes `parent`.
    pub fn nest(mut self, parent: &str) -> Self {
        self.name = if self.name.is_empty() {
            parent.to_owned()
        } else {
            format!("{parent}.{}", self.name)
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    pub fn into_parts(self) -> (String, Cause) {
        (self.name, self.cause)
    }
}

/// Builds a [`NamedError`] from a field name and a `format!` template.
///
/// ```
/// let err = decode_errors::named_error!("Field", "expected {}, got {}", "int", "string");
/// assert_eq!(err.to_string(), "'Field': expected int, got string");
/// ```
#[macro_export]
macro_rules! named_error {
    ($name:expr, $($arg:tt)+) => {
        $crate::NamedError::new($name, $crate::Cause::Message(::std::format!($($arg)+)))
    };
}
