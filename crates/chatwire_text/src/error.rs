use std::io;

use chatwire_ident::IdentError;
use thiserror::Error;

use crate::color::ColorError;

/// Errors returned by the codecs in this crate.
///
/// Decoding stops at the first error; no partial tree is returned.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is valid JSON but has the wrong shape or value types.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A color name that isn't in the palette, or a hex color that couldn't
    /// be read.
    #[error("invalid color \"{0}\"")]
    InvalidColor(String),
    /// A hex color with the wrong number of digits or a non-hex digit.
    #[error("invalid hex color format \"{0}\"")]
    InvalidFormat(String),
    /// A JSON value that cannot be read as any component kind.
    #[error("unsupported component kind: {0}")]
    UnsupportedComponentKind(String),
    /// A hover event whose payload cannot be decoded for its action.
    #[error("unsupported hover event action \"{0}\"")]
    UnsupportedHoverAction(String),
    /// A component array with no elements.
    #[error("component array must not be empty")]
    EmptyArray,
    #[error(transparent)]
    Ident(#[from] IdentError),
    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}

impl From<ColorError> for Error {
    fn from(value: ColorError) -> Self {
        match value {
            ColorError::UnknownName(name) => Self::InvalidColor(name),
            ColorError::BadHex(hex) => Self::InvalidFormat(hex),
        }
    }
}
