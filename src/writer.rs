use crate::codec::{Endian, Primitive};
use crate::error::invalid_input;
use crate::flags::{pack_flags, FlagSet};
use crate::{ByteSink, GrowableBuffer, Result, WriteStruct};
use std::iter::once;
use zerocopy::byteorder::{ByteOrder, BE, LE, U16};
use zerocopy::IntoBytes;

/// Encodes values and pushes the bytes to a sink.
///
/// Every write returns `&mut Self` so that writes can be chained:
///
/// ```
/// # use binstream::StreamWriter;
/// let mut w = StreamWriter::wrap(Vec::new());
/// w.write_u8(1).unwrap().write_u16(0x0302).unwrap().write_bool(true).unwrap();
/// assert_eq!(w.sink, [1, 2, 3, 1]);
/// ```
pub struct StreamWriter<S> {
    /// The output sink.
    pub sink: S,
    endian: Endian,
}

impl StreamWriter<GrowableBuffer<'static>> {
    /// Creates a little-endian writer over an empty, growing in-memory buffer.
    pub fn new() -> Self {
        Self::wrap(GrowableBuffer::new())
    }
}

impl Default for StreamWriter<GrowableBuffer<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSink> StreamWriter<S> {
    /// Creates a little-endian writer over `sink`.
    pub fn wrap(sink: S) -> Self {
        Self::with_endian(sink, Endian::Little)
    }

    /// Creates a writer with the given byte order.
    pub fn with_endian(sink: S, endian: Endian) -> Self {
        Self { sink, endian }
    }

    /// The byte order of multi-byte values.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Extracts the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Accesses the sink.
    pub fn inner(&self) -> &S {
        &self.sink
    }

    /// Accesses the sink mutably.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Writes `bytes` unchanged.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.sink.accept(bytes)?;
        Ok(self)
    }

    /// Writes any fixed-width primitive in the writer's byte order. Exactly
    /// [`Primitive::WIDTH`] bytes are produced.
    #[inline(always)]
    pub fn write<P: Primitive>(&mut self, value: P) -> Result<&mut Self> {
        self.write_bytes(value.to_bytes(self.endian).as_ref())
    }

    /// Writes a single `u8` value.
    pub fn write_u8(&mut self, value: u8) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a single `i8` value.
    pub fn write_i8(&mut self, value: i8) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a 2-byte `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a 2-byte `i16`.
    pub fn write_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a 4-byte `u32`.
    pub fn write_u32(&mut self, value: u32) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a 4-byte `i32`.
    pub fn write_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes an 8-byte `u64`.
    pub fn write_u64(&mut self, value: u64) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes an 8-byte `i64`.
    pub fn write_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a 4-byte IEEE-754 `f32`.
    pub fn write_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes an 8-byte IEEE-754 `f64`.
    pub fn write_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<&mut Self> {
        self.write(value)
    }

    /// Writes the UTF-8 bytes of `s` followed by one zero byte.
    ///
    /// `s` should not contain `'\0'`; a reader would stop at the first one.
    pub fn write_c_str(&mut self, s: &str) -> Result<&mut Self> {
        self.write_bytes(s.as_bytes())?.write_u8(0)
    }

    /// Writes `s` as UTF-16 code units in the writer's byte order, followed by one zero unit.
    pub fn write_c_wstr(&mut self, s: &str) -> Result<&mut Self> {
        match self.endian {
            Endian::Little => self.write_wide::<LE>(s),
            Endian::Big => self.write_wide::<BE>(s),
        }
    }

    fn write_wide<O: ByteOrder>(&mut self, s: &str) -> Result<&mut Self> {
        let units: Vec<U16<O>> = s.encode_utf16().chain(once(0)).map(U16::new).collect();
        self.write_bytes(units.as_bytes())
    }

    /// Writes a one-byte length followed by the UTF-8 bytes of `s`.
    ///
    /// Strings longer than 255 bytes fail with
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) and nothing is written.
    pub fn write_n_str(&mut self, s: &str) -> Result<&mut Self> {
        self.write_n_bytes(s.as_bytes())
    }

    /// Writes a one-byte length followed by `bytes`. Same limit as [`Self::write_n_str`].
    pub fn write_n_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let len = u8::try_from(bytes.len()).map_err(|_| {
            invalid_input(format!(
                "length-prefixed string of {} bytes exceeds 255",
                bytes.len()
            ))
        })?;
        self.write_u8(len)?.write_bytes(bytes)
    }

    /// Writes `flags` packed into `ceil(flags.len() / 8)` bytes. See [`crate::flags`].
    pub fn write_flags(&mut self, flags: &FlagSet) -> Result<&mut Self> {
        self.write_bytes(&pack_flags(flags))
    }

    /// Lets `value` write itself to this writer.
    pub fn write_struct<T: WriteStruct>(&mut self, value: &T) -> Result<&mut Self> {
        value.write_to(self)?;
        Ok(self)
    }

    /// Builds a structure with `factory`, then lets it write itself to this writer.
    pub fn write_struct_with<T: WriteStruct>(
        &mut self,
        factory: impl FnOnce() -> T,
    ) -> Result<&mut Self> {
        self.write_struct(&factory())
    }
}
