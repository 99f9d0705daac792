//! Run-length coding of the per-vertex cube face sequence.

use bytestream::{ByteReader, ByteWriter, WideInt};

use crate::error::{CodecError, CodecResult};
use crate::projection::NUM_FACES;

/// A maximal run of consecutive vertices on the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceRun {
    pub face: u8,
    pub count: u32,
}

/// Accumulates face runs while encoding, or holds them after decoding.
///
/// Each run goes on the wire as one varint of `NUM_FACES * count + face`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceRunCoder {
    runs: Vec<FaceRun>,
}

impl FaceRunCoder {
    /// Creates an empty coder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the runs collected so far.
    #[must_use]
    pub fn runs(&self) -> &[FaceRun] {
        &self.runs
    }

    /// Appends one vertex on `face`, extending the last run when possible.
    pub fn add_face(&mut self, face: u8) {
        match self.runs.last_mut() {
            Some(run) if run.face == face => run.count += 1,
            _ => self.runs.push(FaceRun { face, count: 1 }),
        }
    }

    /// Writes every run.
    pub fn encode(&self, writer: &mut ByteWriter) {
        for run in &self.runs {
            // The last run's count is implied by the vertex count but is still written.
            let packed =
                u64::from(NUM_FACES) * u64::from(run.count) + u64::from(run.face);
            writer.write_varu64(WideInt::new(packed));
        }
    }

    /// Reads runs until they cover at least `vertices` vertices.
    ///
    /// # Errors
    ///
    /// Fails on truncated input, on a packed run wider than 32 bits, or on a
    /// run with a zero count.
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(vertices: usize, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let mut runs = Vec::new();
        let mut parsed = 0usize;
        while parsed < vertices {
            let packed = reader.read_varu64()?.to_unsigned_int32()?;
            let run = FaceRun {
                face: (packed % u32::from(NUM_FACES)) as u8,
                count: packed / u32::from(NUM_FACES),
            };
            if run.count == 0 {
                return Err(CodecError::EmptyFaceRun);
            }
            parsed = parsed.saturating_add(run.count as usize);
            runs.push(run);
        }
        Ok(Self { runs })
    }

    /// Returns a forward-only iterator over the face of each vertex.
    #[must_use]
    pub fn faces(&self) -> FaceIter<'_> {
        FaceIter {
            runs: &self.runs,
            run: 0,
            used: 0,
        }
    }
}

/// Replays face runs one vertex at a time.
///
/// The iterator is finite and cannot be restarted. Use
/// [`next_face`](Self::next_face) where running out of faces is an error.
#[derive(Debug, Clone)]
pub struct FaceIter<'a> {
    runs: &'a [FaceRun],
    run: usize,
    used: u32,
}

impl FaceIter<'_> {
    /// Returns the next face.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FacesExhausted`] once every run has been
    /// consumed, including when there were no runs at all.
    pub fn next_face(&mut self) -> CodecResult<u8> {
        self.next().ok_or(CodecError::FacesExhausted)
    }
}

impl Iterator for FaceIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            let run = self.runs.get(self.run)?;
            if self.used < run.count {
                self.used += 1;
                return Some(run.face);
            }
            self.run += 1;
            self.used = 0;
        }
    }
}

impl std::iter::FusedIterator for FaceIter<'_> {}
