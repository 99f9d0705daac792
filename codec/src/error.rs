//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during polyline encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Byte stream error (out of data, malformed varint, wide-int range).
    Stream(bytestream::StreamError),

    /// Derivative order outside the supported range.
    InvalidDerivativeOrder { order: usize },

    /// Unknown envelope version byte.
    UnsupportedVersion { found: u8 },

    /// Snap level exceeds the maximum cell level.
    InvalidLevel { level: u8 },

    /// More off-center overrides than vertices.
    InconsistentOffCenterCount { off_center: u32, vertices: usize },

    /// Off-center override refers to a vertex that does not exist.
    OffCenterIndexOutOfRange { index: u32, vertices: usize },

    /// A face run with a zero count.
    EmptyFaceRun,

    /// Face iterator was advanced past its last run.
    FacesExhausted,

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Text form is not valid URL-safe base64.
    InvalidText(base64::DecodeError),
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Vertices,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(e) => write!(f, "stream error: {e}"),
            Self::InvalidDerivativeOrder { order } => {
                write!(f, "unsupported derivative order: {order}")
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported polyline encoding version {found}")
            }
            Self::InvalidLevel { level } => write!(f, "invalid level {level}"),
            Self::InconsistentOffCenterCount {
                off_center,
                vertices,
            } => {
                write!(
                    f,
                    "off-center count {off_center} exceeds vertex count {vertices}"
                )
            }
            Self::OffCenterIndexOutOfRange { index, vertices } => {
                write!(
                    f,
                    "off-center index {index} out of range for {vertices} vertices"
                )
            }
            Self::EmptyFaceRun => write!(f, "face run with zero count"),
            Self::FacesExhausted => write!(f, "no such element: face runs exhausted"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::InvalidText(e) => write!(f, "invalid polyline text: {e}"),
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertices => "vertices",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(e) => Some(e),
            Self::InvalidText(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bytestream::StreamError> for CodecError {
    fn from(err: bytestream::StreamError) -> Self {
        Self::Stream(err)
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidText(err)
    }
}
