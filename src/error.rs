//! Error types for `fntconv`

use thiserror::Error;

/// The error type for `fntconv` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input text could not be parsed as a bitmap-font descriptor.
    #[error("invalid font descriptor: {message}")]
    InvalidDocument {
        /// The parser's description of what is invalid.
        message: String,
    },

    /// XML serialization error.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Build an [`Error::InvalidDocument`] from any displayable parse failure.
    pub(crate) fn invalid_document(message: impl std::fmt::Display) -> Self {
        Error::InvalidDocument {
            message: message.to_string(),
        }
    }
}

// Attribute errors (malformed or duplicate attributes) are parse failures.
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::invalid_document(err)
    }
}

/// A specialized Result type for `fntconv` operations.
pub type Result<T> = std::result::Result<T, Error>;
