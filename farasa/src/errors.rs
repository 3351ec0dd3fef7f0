//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for Farasa.
pub type Result<T, E = FarasaError> = std::result::Result<T, E>;

/// The error type for Farasa.
///
/// Every variant is raised while loading or storing a model. Segmentation
/// itself never fails.
#[derive(Debug)]
pub enum FarasaError {
    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`InvalidFormatError`].
    InvalidFormat(InvalidFormatError),

    /// The error variant for [`MissingTableError`].
    MissingTable(MissingTableError),

    /// The error variant for [`serde_json::Error`].
    Json(serde_json::Error),

    /// The error variant for [`DecodeError`](bincode::error::DecodeError).
    BincodeDecode(bincode::error::DecodeError),

    /// The error variant for [`EncodeError`](bincode::error::EncodeError).
    BincodeEncode(bincode::error::EncodeError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl FarasaError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_format<S>(table: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            table,
            msg: msg.into(),
        })
    }

    pub(crate) const fn missing_table(table: &'static str) -> Self {
        Self::MissingTable(MissingTableError { table })
    }
}

impl fmt::Display for FarasaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::InvalidFormat(e) => e.fmt(f),
            Self::MissingTable(e) => e.fmt(f),
            Self::Json(e) => e.fmt(f),
            Self::BincodeDecode(e) => e.fmt(f),
            Self::BincodeEncode(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for FarasaError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when the content of a statistical table is malformed.
#[derive(Debug)]
pub struct InvalidFormatError {
    /// Name of the table.
    pub(crate) table: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.table, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// Error used when a required statistical table cannot be found.
#[derive(Debug)]
pub struct MissingTableError {
    /// Name of the table.
    pub(crate) table: &'static str,
}

impl MissingTableError {
    /// Gets the name of the missing table.
    pub const fn table(&self) -> &'static str {
        self.table
    }
}

impl fmt::Display for MissingTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MissingTableError: {} is not found", self.table)
    }
}

impl Error for MissingTableError {}

impl From<serde_json::Error> for FarasaError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<bincode::error::DecodeError> for FarasaError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::BincodeDecode(error)
    }
}

impl From<bincode::error::EncodeError> for FarasaError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::BincodeEncode(error)
    }
}

impl From<std::io::Error> for FarasaError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
