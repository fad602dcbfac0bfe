//! Capabilities that let caller-defined structures nest inside a stream like any primitive.
//!
//! The reader and writer never look inside a structure. A structure decides its own layout by
//! calling primitive (or nested structure) methods on the reader or writer it is handed.
//!
//! ```
//! use binstream::{ByteSink, ByteSource, ReadStruct, Result, StreamReader, StreamWriter, WriteStruct};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl ReadStruct for Point {
//!     fn read_from<S: ByteSource>(&mut self, r: &mut StreamReader<S>) -> Result<()> {
//!         self.x = r.read_i32()?;
//!         self.y = r.read_i32()?;
//!         Ok(())
//!     }
//! }
//!
//! impl WriteStruct for Point {
//!     fn write_to<S: ByteSink>(&self, w: &mut StreamWriter<S>) -> Result<()> {
//!         w.write_i32(self.x)?.write_i32(self.y)?;
//!         Ok(())
//!     }
//! }
//!
//! let mut w = StreamWriter::wrap(Vec::new());
//! w.write_struct(&Point { x: 1, y: -2 }).unwrap();
//!
//! let mut r = StreamReader::new(w.sink.as_slice());
//! assert_eq!(r.read_struct::<Point>().unwrap(), Point { x: 1, y: -2 });
//! ```

use crate::{ByteSink, ByteSource, Result, StreamReader, StreamWriter};

/// A structure that can populate itself from a [`StreamReader`].
///
/// The method is generic over the source, so this trait cannot be used as a trait object.
pub trait ReadStruct {
    /// Reads this structure's fields from `reader`, in the structure's own layout.
    fn read_from<S: ByteSource>(&mut self, reader: &mut StreamReader<S>) -> Result<()>;
}

/// A structure that can serialize itself to a [`StreamWriter`].
///
/// The method is generic over the sink, so this trait cannot be used as a trait object.
pub trait WriteStruct {
    /// Writes this structure's fields to `writer`, in the structure's own layout.
    fn write_to<S: ByteSink>(&self, writer: &mut StreamWriter<S>) -> Result<()>;
}

impl<T: ReadStruct> ReadStruct for Box<T> {
    fn read_from<S: ByteSource>(&mut self, reader: &mut StreamReader<S>) -> Result<()> {
        (**self).read_from(reader)
    }
}

impl<T: WriteStruct> WriteStruct for &T {
    fn write_to<S: ByteSink>(&self, writer: &mut StreamWriter<S>) -> Result<()> {
        (**self).write_to(writer)
    }
}

impl<T: WriteStruct> WriteStruct for Box<T> {
    fn write_to<S: ByteSink>(&self, writer: &mut StreamWriter<S>) -> Result<()> {
        (**self).write_to(writer)
    }
}
