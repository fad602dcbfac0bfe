use crate::codec::{Endian, Primitive};
use crate::error::{insufficient_data, invalid_data};
use crate::flags::{packed_len, unpack_flags, FlagSet};
use crate::{ByteSource, ReadStruct, Result};

/// Reads values from a byte source, one value after another.
///
/// Bytes pulled from the source but not consumed yet stay buffered inside the reader. Each read
/// pulls from the source exactly once, appending whatever it delivers, and then checks the
/// buffered bytes. If they are too few, the read fails with
/// [`Error::InsufficientData`](crate::Error::InsufficientData) and nothing is consumed. A stream
/// that delivers its bytes slowly therefore has to be read in steps that match what it has
/// delivered; the reader never waits.
///
/// Multi-byte values use the reader's [`Endian`], which is fixed at construction.
pub struct StreamReader<S> {
    source: S,
    /// Received bytes. Everything before `pos` has been consumed.
    pending: Vec<u8>,
    pos: usize,
    endian: Endian,
}

impl<'a> StreamReader<&'a [u8]> {
    /// Creates a little-endian reader over an in-memory byte slice.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<S: ByteSource> StreamReader<S> {
    /// Creates a little-endian reader.
    pub fn new(source: S) -> Self {
        Self::with_endian(source, Endian::Little)
    }

    /// Creates a reader with the given byte order.
    pub fn with_endian(source: S, endian: Endian) -> Self {
        Self {
            source,
            pending: Vec::new(),
            pos: 0,
            endian,
        }
    }

    /// The byte order of multi-byte values.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Number of bytes received from the source and not consumed yet.
    pub fn buffered(&self) -> usize {
        self.pending.len() - self.pos
    }

    /// Extracts the source. Buffered bytes are discarded.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Drops consumed bytes once they make up at least half of the pending buffer.
    fn compact(&mut self) {
        if self.pos == self.pending.len() {
            self.pending.clear();
            self.pos = 0;
        } else if self.pos >= self.pending.len() / 2 {
            self.pending.drain(..self.pos);
            self.pos = 0;
        }
    }

    /// Consumes `len` bytes and returns them. On failure nothing is consumed.
    fn take(&mut self, len: usize) -> Result<&[u8]> {
        self.compact();
        self.source.pull(&mut self.pending)?;

        let available = self.buffered();
        if available < len {
            return Err(insufficient_data(len, available));
        }

        let start = self.pos;
        self.pos += len;
        Ok(&self.pending[start..self.pos])
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take(N)?);
        Ok(bytes)
    }

    /// Reads any fixed-width primitive in the reader's byte order.
    #[inline(always)]
    pub fn read<P: Primitive>(&mut self) -> Result<P> {
        let mut bytes = <P::Bytes>::default();
        bytes.as_mut().copy_from_slice(self.take(P::WIDTH)?);
        Ok(P::from_bytes(bytes, self.endian))
    }

    /// Reads a single `u8` value.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    /// Reads a single `i8` value.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    /// Reads a 2-byte `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    /// Reads a 2-byte `i16`.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    /// Reads a 4-byte `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    /// Reads a 4-byte `i32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    /// Reads an 8-byte `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    /// Reads an 8-byte `i64`.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }

    /// Reads a 4-byte IEEE-754 `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read()
    }

    /// Reads an 8-byte IEEE-754 `f64`.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read()
    }

    /// Reads one byte. Any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read()
    }

    /// Reads bytes up to a zero byte, which is consumed but not returned.
    ///
    /// If the source runs dry before the terminator, this fails and the bytes read so far are
    /// lost.
    pub fn read_c_bytes(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8()? {
                0 => return Ok(bytes),
                b => bytes.push(b),
            }
        }
    }

    /// Reads a zero-terminated UTF-8 string.
    pub fn read_c_str(&mut self) -> Result<String> {
        String::from_utf8(self.read_c_bytes()?)
            .map_err(|e| invalid_data(format!("C string is not valid UTF-8: {e}")))
    }

    /// Reads a zero-terminated byte string without validating it as UTF-8.
    #[cfg(feature = "bstr")]
    pub fn read_c_str_bstr(&mut self) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.read_c_bytes()?))
    }

    /// Reads 2-byte code units, in the reader's byte order, up to a zero unit. The terminator is
    /// consumed but not returned.
    pub fn read_c_wchars(&mut self) -> Result<Vec<u16>> {
        let mut units = Vec::new();
        loop {
            match self.read_u16()? {
                0 => return Ok(units),
                unit => units.push(unit),
            }
        }
    }

    /// Reads a zero-terminated UTF-16 string.
    ///
    /// Unpaired surrogates make this fail with
    /// [`Error::InvalidData`](crate::Error::InvalidData).
    pub fn read_c_wstr(&mut self) -> Result<String> {
        String::from_utf16(&self.read_c_wchars()?)
            .map_err(|_| invalid_data("C wide string is not valid UTF-16"))
    }

    /// Reads a zero-terminated UTF-16 string, replacing unpaired surrogates with U+FFFD.
    pub fn read_c_wstr_lossy(&mut self) -> Result<String> {
        Ok(String::from_utf16_lossy(&self.read_c_wchars()?))
    }

    /// Reads a string prefixed by a one-byte length, which counts bytes. At most 255 bytes.
    pub fn read_n_str(&mut self) -> Result<String> {
        let len = self.read_u8()? as usize;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes)
            .map_err(|e| invalid_data(format!("length-prefixed string is not valid UTF-8: {e}")))
    }

    /// Reads a byte string prefixed by a one-byte length, without validating it as UTF-8.
    #[cfg(feature = "bstr")]
    pub fn read_n_str_bstr(&mut self) -> Result<bstr::BString> {
        let len = self.read_u8()? as usize;
        Ok(bstr::BString::from(self.read_bytes(len)?))
    }

    /// Reads a packed flag set with one flag per name. See [`crate::flags`] for the layout.
    pub fn read_flags<N: AsRef<str>>(&mut self, names: &[N]) -> Result<FlagSet> {
        let packed = self.take(packed_len(names.len()))?;
        unpack_flags(packed, names)
    }

    /// Builds a structure with `factory`, then lets it read itself from this reader.
    pub fn read_struct_with<T: ReadStruct>(&mut self, factory: impl FnOnce() -> T) -> Result<T> {
        let mut value = factory();
        value.read_from(self)?;
        Ok(value)
    }

    /// Reads a structure, starting from its default value.
    pub fn read_struct<T: ReadStruct + Default>(&mut self) -> Result<T> {
        self.read_struct_with(T::default)
    }
}
