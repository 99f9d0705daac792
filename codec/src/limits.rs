//! Limits for polyline decoding.

/// Codec-specific limits enforced while decoding untrusted bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of vertices a decoded polyline may declare.
    pub max_vertices: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_vertices: 1 << 24,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_vertices: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_vertices: usize::MAX,
        }
    }
}
