//! Byte order and the fixed-width primitive encodings.

/// Byte order used for multi-byte values. Fixed for the lifetime of a reader or writer.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Endian {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

/// A fixed-width scalar that converts to and from an exact-size byte array.
///
/// `Bytes` is always `[u8; N]` where `N` is the encoded width, so encoding never allocates.
pub trait Primitive: Copy {
    /// The encoded representation, `[u8; N]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decodes a value from its encoded bytes.
    fn from_bytes(bytes: Self::Bytes, endian: Endian) -> Self;

    /// Encodes a value into its bytes.
    fn to_bytes(self, endian: Endian) -> Self::Bytes;
}

macro_rules! primitive {
    ($($ty:ty => $width:literal,)*) => {
        $(
            impl Primitive for $ty {
                type Bytes = [u8; $width];
                const WIDTH: usize = $width;

                #[inline(always)]
                fn from_bytes(bytes: [u8; $width], endian: Endian) -> Self {
                    match endian {
                        Endian::Little => <$ty>::from_le_bytes(bytes),
                        Endian::Big => <$ty>::from_be_bytes(bytes),
                    }
                }

                #[inline(always)]
                fn to_bytes(self, endian: Endian) -> [u8; $width] {
                    match endian {
                        Endian::Little => self.to_le_bytes(),
                        Endian::Big => self.to_be_bytes(),
                    }
                }
            }
        )*
    };
}

primitive! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

impl Primitive for bool {
    type Bytes = [u8; 1];
    const WIDTH: usize = 1;

    /// Any nonzero byte is `true`.
    #[inline(always)]
    fn from_bytes(bytes: [u8; 1], _endian: Endian) -> Self {
        bytes[0] != 0
    }

    #[inline(always)]
    fn to_bytes(self, _endian: Endian) -> [u8; 1] {
        [self as u8]
    }
}
