//! Error types for byte stream operations.

use std::fmt;

/// Result type for byte stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while reading or converting stream values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Attempted to read past the end of the buffer.
    OutOfData {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A varint did not terminate within ten bytes.
    MalformedVarint,

    /// Value is negative or wider than 32 bits and cannot become an unsigned
    /// 32-bit wide integer.
    NotUnsignedInt32 {
        /// The rejected value.
        value: i64,
    },

    /// Wide integer has non-zero high bits and cannot narrow to `u32`.
    WideOverflow {
        /// The full 64-bit value.
        value: u64,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfData {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of data: attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::MalformedVarint => write!(f, "malformed varint"),
            Self::NotUnsignedInt32 { value } => {
                write!(f, "value {value} is not an unsigned int32")
            }
            Self::WideOverflow { value } => {
                write!(f, "value 0x{value:016X} does not fit in an unsigned int32")
            }
        }
    }
}

impl std::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_out_of_data() {
        let err = StreamError::OutOfData {
            requested: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("8 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention available bytes");
        assert!(msg.contains("out of data"));
    }

    #[test]
    fn error_display_malformed_varint() {
        assert_eq!(StreamError::MalformedVarint.to_string(), "malformed varint");
    }

    #[test]
    fn error_display_not_unsigned() {
        let msg = StreamError::NotUnsignedInt32 { value: -5 }.to_string();
        assert!(msg.contains("-5"));
    }

    #[test]
    fn error_display_wide_overflow() {
        let msg = StreamError::WideOverflow {
            value: 0x1_0000_0000,
        }
        .to_string();
        assert!(msg.contains("0x0000000100000000"));
    }

    #[test]
    fn error_equality() {
        let err1 = StreamError::OutOfData {
            requested: 8,
            available: 3,
        };
        let err2 = StreamError::OutOfData {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1.clone(), err1);
        assert_ne!(err1, err2);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<StreamError>();
    }
}
