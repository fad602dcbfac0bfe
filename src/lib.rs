//! Reads and writes fixed-width integers, floats, booleans, strings, raw bytes, packed flag sets
//! and caller-defined structures over in-memory buffers and streaming sources and sinks.
//!
//! * [`StreamReader`] pulls bytes from a [`ByteSource`] on demand and decodes values from them.
//! * [`StreamWriter`] encodes values and pushes the bytes to a [`ByteSink`].
//! * [`GrowableBuffer`] is the in-memory sink, either growing on demand or fixed in size.
//! * [`ReadStruct`] and [`WriteStruct`] let structures compose from these primitives.
//! * [`flags`] packs named booleans into bits.
//!
//! Multi-byte values use the [`Endian`] chosen when the reader or writer is created.
//!
//! | Kind | Encoding |
//! |------|----------|
//! | `u8`, `i8`, `bool` | 1 byte; `bool` is 1 or 0, and any nonzero byte reads as `true` |
//! | `u16`, `i16` | 2 bytes |
//! | `u32`, `i32`, `f32` | 4 bytes |
//! | `u64`, `i64`, `f64` | 8 bytes |
//! | C string | UTF-8 bytes, then a zero byte |
//! | C wide string | UTF-16 code units, then a zero unit |
//! | n-string | 1 length byte (0..=255), then that many UTF-8 bytes |
//!
//! ```
//! use binstream::{Endian, StreamReader, StreamWriter};
//!
//! let mut w = StreamWriter::with_endian(Vec::new(), Endian::Big);
//! w.write_u32(0xdead_beef).unwrap().write_n_str("hi").unwrap();
//! assert_eq!(w.sink, [0xde, 0xad, 0xbe, 0xef, 2, b'h', b'i']);
//!
//! let mut r = StreamReader::with_endian(w.sink.as_slice(), Endian::Big);
//! assert_eq!(r.read_u32().unwrap(), 0xdead_beef);
//! assert_eq!(r.read_n_str().unwrap(), "hi");
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod buffer;
mod codec;
mod error;
pub mod flags;
mod reader;
mod sink;
mod source;
mod structs;
mod writer;


pub use buffer::{Chunk, GrowableBuffer, ResizePolicy, TextEncoding};
pub use codec::{Endian, Primitive};
pub use error::{Error, Result};
pub use flags::{pack_flags, unpack_flags, FlagSet};
pub use reader::StreamReader;
pub use sink::{ByteSink, IoSink};
pub use source::{ByteSource, ChunkSource, IoSource};
pub use structs::{ReadStruct, WriteStruct};
pub use writer::StreamWriter;
