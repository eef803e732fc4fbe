// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for structural decode/encode.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while decoding or encoding a structural value.
///
/// "Field not found in the layout" is deliberately *not* an error: that is
/// the expected schema-drift case and leaves the slot at its default.
/// A failure mid-decode leaves the instance partially populated; it must be
/// discarded, not retried in place.
#[derive(Debug)]
pub enum CodecError {
    /// Reader ran out of bytes. Usually the downstream symptom of layout
    /// metadata whose byte sizes do not match the actual stream.
    OutOfBytes { need: usize, have: usize },
    /// A length prefix (string or array) exceeds the remaining stream.
    LengthOutOfRange { length: usize, remaining: usize },
    /// String payload was not valid UTF-8.
    InvalidString(std::string::FromUtf8Error),
    /// A field slot does not match its descriptor during encode.
    TypeMismatch { expected: String, found: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBytes { need, have } => {
                write!(f, "Out of bytes: need {} bytes, have {}", need, have)
            }
            Self::LengthOutOfRange { length, remaining } => {
                write!(
                    f,
                    "Length prefix out of range: {} with {} bytes remaining",
                    length, remaining
                )
            }
            Self::InvalidString(e) => write!(f, "Invalid UTF-8 string: {}", e),
            Self::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidString(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::InvalidString(e)
    }
}

/// Errors from the availability-config loaders.
#[cfg(feature = "config-loaders")]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

#[cfg(feature = "config-loaders")]
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Config I/O error: {}", e),
            Self::Parse(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

#[cfg(feature = "config-loaders")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[cfg(feature = "config-loaders")]
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "config-loaders")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}
