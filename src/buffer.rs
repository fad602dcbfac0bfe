//! An in-memory write target with an optional growth policy.

use crate::error::{invalid_input, out_of_bounds};
use crate::Result;

/// What a [`GrowableBuffer`] does when a write would run past its end.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ResizePolicy {
    /// Extend the buffer by exactly the number of missing bytes.
    #[default]
    Grow,
    /// Reject the write with [`Error::OutOfBounds`](crate::Error::OutOfBounds).
    Fixed,
}

/// Encoding applied to a [`Chunk::Text`] before it is buffered.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum TextEncoding {
    /// UTF-8, the bytes of the `str` unchanged.
    #[default]
    Utf8,
    /// UTF-16 code units in little-endian byte order, no BOM.
    Utf16Le,
    /// One byte per character. Characters above U+00FF are rejected.
    Latin1,
}

impl TextEncoding {
    /// Encodes `text` into a new byte vector.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        invalid_input(format!("character {c:?} cannot be encoded as Latin-1"))
                    })
                })
                .collect(),
        }
    }
}

/// One unit of input to [`GrowableBuffer::write_chunk`].
#[derive(Copy, Clone, Debug)]
pub enum Chunk<'a> {
    /// Raw bytes, buffered unchanged.
    Bytes(&'a [u8]),
    /// Text, encoded with the given encoding before it is buffered.
    Text(&'a str, TextEncoding),
}

impl<'a> From<&'a [u8]> for Chunk<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(text: &'a str) -> Self {
        Chunk::Text(text, TextEncoding::Utf8)
    }
}

enum Storage<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

/// Accumulates written bytes at a write offset, growing on demand or enforcing a fixed capacity.
///
/// # Aliasing
///
/// A buffer created with [`GrowableBuffer::over_slice`] writes into the caller's storage in
/// place. As long as every write fits, the caller's slice sees each byte once the borrow ends.
/// The first write that needs to grow the buffer copies the contents into an owned `Vec<u8>`
/// and continues there; from that point the caller's slice no longer receives writes, and
/// [`GrowableBuffer::is_detached`] returns `true`. Read the result through
/// [`GrowableBuffer::as_slice`] or [`GrowableBuffer::into_vec`] rather than the original slice
/// whenever growth is allowed.
pub struct GrowableBuffer<'a> {
    storage: Storage<'a>,
    pos: usize,
    policy: ResizePolicy,
    detached: bool,
}

impl GrowableBuffer<'static> {
    /// Creates an empty buffer that grows on demand.
    pub fn new() -> Self {
        Self::with_vec(Vec::new(), ResizePolicy::Grow)
    }

    /// Creates a buffer over `buf`. Writes start at offset 0 and overwrite existing contents;
    /// the capacity is `buf.len()`.
    pub fn with_vec(buf: Vec<u8>, policy: ResizePolicy) -> Self {
        Self {
            storage: Storage::Owned(buf),
            pos: 0,
            policy,
            detached: false,
        }
    }

    /// Creates a zero-filled buffer of length `capacity`.
    pub fn with_capacity(capacity: usize, policy: ResizePolicy) -> Self {
        Self::with_vec(vec![0; capacity], policy)
    }
}

impl Default for GrowableBuffer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GrowableBuffer<'a> {
    /// Creates a buffer that writes into caller-supplied storage. See the type-level docs for
    /// what happens when such a buffer grows.
    pub fn over_slice(buf: &'a mut [u8], policy: ResizePolicy) -> Self {
        Self {
            storage: Storage::Borrowed(buf),
            pos: 0,
            policy,
            detached: false,
        }
    }

    /// Writes `chunk` at the current offset and advances the offset past it.
    ///
    /// If the chunk does not fit, a [`ResizePolicy::Fixed`] buffer fails with
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) and is left untouched, while a
    /// [`ResizePolicy::Grow`] buffer is first extended by exactly the overflow.
    pub fn write(&mut self, chunk: &[u8]) -> Result<usize> {
        let end = self.pos + chunk.len();
        let capacity = self.capacity();
        if end > capacity {
            if self.policy == ResizePolicy::Fixed {
                return Err(out_of_bounds(self.pos, chunk.len(), capacity));
            }
            self.grow_by(end - capacity);
        }

        let pos = self.pos;
        self.as_mut_slice()[pos..end].copy_from_slice(chunk);
        self.pos = end;
        Ok(chunk.len())
    }

    /// Writes raw bytes or encoded text.
    pub fn write_chunk(&mut self, chunk: Chunk<'_>) -> Result<usize> {
        match chunk {
            Chunk::Bytes(bytes) => self.write(bytes),
            Chunk::Text(text, encoding) => self.write(&encoding.encode(text)?),
        }
    }

    fn grow_by(&mut self, extra: usize) {
        let detached = match &mut self.storage {
            Storage::Owned(buf) => {
                buf.resize(buf.len() + extra, 0);
                return;
            }
            Storage::Borrowed(buf) => {
                let mut owned = Vec::with_capacity(buf.len() + extra);
                owned.extend_from_slice(buf);
                owned.resize(buf.len() + extra, 0);
                owned
            }
        };
        self.storage = Storage::Owned(detached);
        self.detached = true;
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Borrowed(buf) => &mut **buf,
            Storage::Owned(buf) => buf.as_mut_slice(),
        }
    }

    /// The whole buffer, including bytes past the write offset.
    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Borrowed(buf) => &**buf,
            Storage::Owned(buf) => buf.as_slice(),
        }
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.as_slice()[..self.pos]
    }

    /// Offset of the next write.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current length of the underlying storage.
    pub fn capacity(&self) -> usize {
        self.as_slice().len()
    }

    /// The growth policy.
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Returns `true` once a buffer created over caller storage has grown into storage of its own.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Extracts the whole buffer as an owned vector.
    pub fn into_vec(self) -> Vec<u8> {
        match self.storage {
            Storage::Borrowed(buf) => buf.to_vec(),
            Storage::Owned(buf) => buf,
        }
    }
}
