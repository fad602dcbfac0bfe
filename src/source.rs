//! Pull-based byte sources consumed by [`StreamReader`](crate::StreamReader).

use crate::Result;
use std::io::{ErrorKind, Read};

/// Produces bytes on demand.
///
/// A source is asked for more bytes at most once per read. It must not block waiting for data
/// that has not arrived yet; returning `Ok(0)` means "nothing available right now", and the read
/// that triggered the pull fails if the bytes already buffered are not enough.
pub trait ByteSource {
    /// Appends the next available chunk of bytes to `buf` and returns how many were appended.
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        (**self).pull(buf)
    }
}

/// An in-memory slice delivers all of its bytes on the first pull.
impl ByteSource for &[u8] {
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let n = self.len();
        buf.extend_from_slice(self);
        *self = &[];
        Ok(n)
    }
}

impl ByteSource for Vec<u8> {
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let n = self.len();
        buf.append(self);
        Ok(n)
    }
}

/// Delivers one chunk from an iterator per pull.
///
/// This models a stream whose data arrives in pieces: a value that spans two chunks cannot be
/// read until the second chunk has been pulled by an earlier read.
pub struct ChunkSource<I> {
    chunks: I,
}

impl<I> ChunkSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Creates a source over anything that yields byte chunks.
    pub fn new(chunks: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            chunks: chunks.into_iter(),
        }
    }
}

impl<I> ByteSource for ChunkSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        match self.chunks.next() {
            Some(chunk) => {
                let chunk = chunk.as_ref();
                buf.extend_from_slice(chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

const IO_CHUNK_SIZE: usize = 8 * 1024;

/// Adapts a [`Read`] implementation. Each pull issues a single `read` call.
///
/// `WouldBlock` and `Interrupted` are reported as "no data available"; any other I/O error is
/// returned as [`Error::Io`](crate::Error::Io).
pub struct IoSource<R> {
    inner: R,
    chunk_size: usize,
}

impl<R: Read> IoSource<R> {
    /// Wraps `inner`, reading up to 8 KiB per pull.
    pub fn new(inner: R) -> Self {
        Self::with_chunk_size(inner, IO_CHUNK_SIZE)
    }

    /// Wraps `inner`, reading up to `chunk_size` bytes per pull.
    pub fn with_chunk_size(inner: R, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Extracts the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn pull(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let start = buf.len();
        buf.resize(start + self.chunk_size, 0);
        match self.inner.read(&mut buf[start..]) {
            Ok(n) => {
                buf.truncate(start + n);
                Ok(n)
            }
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                buf.truncate(start);
                Ok(0)
            }
            Err(e) => {
                buf.truncate(start);
                Err(e.into())
            }
        }
    }
}
