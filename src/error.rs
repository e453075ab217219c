use super::context::Context;

/// The two classes of failure a call can end in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A call argument was structurally invalid, e.g. defaults that are not
    /// an object.  Raised before any parsing work.
    Type,

    /// The input text broke one of the hard grammar rules.
    Format,
}

/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The defaults handed to the parser or to
    /// [`set_json_defaults`](struct.ConnectionString.html#method.set_json_defaults)
    /// were not an object.
    #[error("invalid 'defaults' parameter")]
    InvalidDefaults,

    /// A whitespace character was found inside the (trimmed) connection
    /// string.  The value is its offset counted in `char`s, not bytes or
    /// UTF-16 code units.
    #[error("invalid URL character at position {0}")]
    IllegalWhitespace(usize),

    /// A host carried a port which is not a clean decimal integer in
    /// `1..=65535`.  The value is the offending port text.
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// A component contained a malformed percent-encoded sequence, or one
    /// which does not decode to UTF-8.
    #[error("invalid percent-encoding in {context}: {text}")]
    InvalidEncoding {
        /// The component being decoded.
        context: Context,
        /// The raw text of that component.
        text: String,
    },

    /// A `url::Url` can only be produced from a connection string that
    /// names a protocol.
    #[error("connection string has no protocol")]
    MissingProtocol,

    /// The built connection string was rejected by `url::Url`.  The value
    /// is the parser's message.
    #[error("not a valid URL: {0}")]
    Url(String),
}

impl Error {
    /// Classify the error as either a call-argument problem or an input
    /// format problem.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDefaults => ErrorKind::Type,
            _ => ErrorKind::Format,
        }
    }
}
