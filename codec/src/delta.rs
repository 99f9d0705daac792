//! Fixed-order finite-difference coding of integer sequences.

use crate::error::{CodecError, CodecResult};

/// Stateful N-th derivative coder.
///
/// Encoding replaces each value with its N-th order difference from the
/// preceding values; decoding integrates it back. The first N values are
/// coded at ramping orders 0, 1, ..., N - 1 since there is not enough history
/// for the full order yet.
///
/// One coder tracks one sequence: feed it values strictly in order, and call
/// [`reset`](Self::reset) before reusing it for an unrelated sequence.
/// Arithmetic wraps in 32 bits.
#[derive(Debug, Clone)]
pub struct NthDerivativeCoder {
    /// The derivative order of the coder.
    n: usize,
    /// The order at which the next value is coded (ramps up to `n`).
    m: usize,
    /// Value memory, from oldest to newest.
    memory: [i32; Self::N_MAX],
}

impl NthDerivativeCoder {
    /// Lowest supported order.
    pub const N_MIN: usize = 0;
    /// Highest supported order.
    pub const N_MAX: usize = 10;

    /// Creates a coder of order `n`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDerivativeOrder`] if `n` is outside
    /// `N_MIN..=N_MAX`.
    pub fn new(n: usize) -> CodecResult<Self> {
        if !(Self::N_MIN..=Self::N_MAX).contains(&n) {
            return Err(CodecError::InvalidDerivativeOrder { order: n });
        }
        Ok(Self {
            n,
            m: 0,
            memory: [0; Self::N_MAX],
        })
    }

    /// Returns the derivative order.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.n
    }

    /// Encodes the next value of the sequence.
    pub fn encode(&mut self, mut k: i32) -> i32 {
        for slot in &mut self.memory[..self.m] {
            let delta = k.wrapping_sub(*slot);
            *slot = k;
            k = delta;
        }
        if self.m < self.n {
            self.memory[self.m] = k;
            self.m += 1;
        }
        k
    }

    /// Decodes the next value of the sequence.
    pub fn decode(&mut self, mut k: i32) -> i32 {
        if self.m < self.n {
            self.m += 1;
        }
        for slot in self.memory[..self.m].iter_mut().rev() {
            *slot = slot.wrapping_add(k);
            k = *slot;
        }
        k
    }

    /// Forgets all history.
    pub fn reset(&mut self) {
        self.memory = [0; Self::N_MAX];
        self.m = 0;
    }
}
