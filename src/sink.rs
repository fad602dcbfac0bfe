//! Byte sinks consumed by [`StreamWriter`](crate::StreamWriter).

use crate::{GrowableBuffer, Result};
use std::io::Write;

/// Accepts bytes for output.
pub trait ByteSink {
    /// Accepts `bytes` in full, or fails.
    fn accept(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn accept(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).accept(bytes)
    }
}

impl ByteSink for Vec<u8> {
    fn accept(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl ByteSink for GrowableBuffer<'_> {
    fn accept(&mut self, bytes: &[u8]) -> Result<()> {
        self.write(bytes).map(drop)
    }
}

/// Adapts a [`Write`] implementation; every chunk is written with `write_all`.
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flushes the wrapped writer.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }

    /// Extracts the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn accept(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(bytes)?)
    }
}
