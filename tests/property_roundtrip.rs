use binstream::*;
use proptest::prelude::*;

fn endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

macro_rules! primitive_roundtrip {
    ($($name:ident: $ty:ty,)*) => {
        proptest! {
            $(
                #[test]
                fn $name(value in any::<$ty>(), endian in endian()) {
                    let mut w = StreamWriter::with_endian(Vec::new(), endian);
                    w.write(value).unwrap();
                    prop_assert_eq!(w.sink.len(), <$ty as Primitive>::WIDTH);

                    let mut r = StreamReader::with_endian(w.sink.as_slice(), endian);
                    let back: $ty = r.read().unwrap();
                    prop_assert_eq!(back.to_bits_or_self(), value.to_bits_or_self());
                    prop_assert_eq!(r.buffered(), 0);
                }
            )*
        }
    };
}

/// Compares floats by bit pattern so NaN payloads round-trip too.
trait BitsOrSelf {
    type Out: PartialEq + std::fmt::Debug;
    fn to_bits_or_self(self) -> Self::Out;
}

macro_rules! bits_or_self {
    ($($ty:ty),*) => {
        $(impl BitsOrSelf for $ty {
            type Out = $ty;
            fn to_bits_or_self(self) -> $ty {
                self
            }
        })*
    };
}

bits_or_self!(u8, i8, u16, i16, u32, i32, u64, i64, bool);

impl BitsOrSelf for f32 {
    type Out = u32;
    fn to_bits_or_self(self) -> u32 {
        self.to_bits()
    }
}

impl BitsOrSelf for f64 {
    type Out = u64;
    fn to_bits_or_self(self) -> u64 {
        self.to_bits()
    }
}

primitive_roundtrip! {
    roundtrip_u8: u8,
    roundtrip_i8: i8,
    roundtrip_u16: u16,
    roundtrip_i16: i16,
    roundtrip_u32: u32,
    roundtrip_i32: i32,
    roundtrip_u64: u64,
    roundtrip_i64: i64,
    roundtrip_f32: f32,
    roundtrip_f64: f64,
    roundtrip_bool: bool,
}

proptest! {
    #[test]
    fn roundtrip_n_str(ref s in "\\PC{0,63}") {
        prop_assume!(s.len() <= 255);
        let mut w = StreamWriter::wrap(Vec::new());
        w.write_n_str(s).unwrap();

        let mut r = StreamReader::from_bytes(&w.sink);
        prop_assert_eq!(&r.read_n_str().unwrap(), s);
    }

    #[test]
    fn roundtrip_c_str(ref s in "[^\\x00]{0,128}", endian in endian()) {
        let mut w = StreamWriter::with_endian(Vec::new(), endian);
        w.write_c_str(s).unwrap().write_u8(0x7e).unwrap();

        let mut r = StreamReader::with_endian(w.sink.as_slice(), endian);
        prop_assert_eq!(&r.read_c_str().unwrap(), s);
        prop_assert_eq!(r.read_u8().unwrap(), 0x7e);
    }

    #[test]
    fn roundtrip_c_wstr(ref s in "[^\\x00]{0,128}", endian in endian()) {
        let mut w = StreamWriter::with_endian(Vec::new(), endian);
        w.write_c_wstr(s).unwrap();
        prop_assert_eq!(w.sink.len(), (s.encode_utf16().count() + 1) * 2);

        let mut r = StreamReader::with_endian(w.sink.as_slice(), endian);
        prop_assert_eq!(&r.read_c_wstr().unwrap(), s);
    }

    #[test]
    fn roundtrip_flags(ref values in proptest::collection::vec(any::<bool>(), 0..64)) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("flag{i}")).collect();
        let flags: FlagSet = names.iter().cloned().zip(values.iter().copied()).collect();

        let packed = pack_flags(&flags);
        prop_assert_eq!(packed.len(), values.len().div_ceil(8));
        prop_assert_eq!(unpack_flags(&packed, names.as_slice()).unwrap(), flags);
    }

    #[test]
    fn chunked_delivery_reads_same_values(
        ref values in proptest::collection::vec(any::<u32>(), 1..32),
        split in 1usize..16,
    ) {
        let mut w = StreamWriter::wrap(Vec::new());
        for &v in values {
            w.write_u32(v).unwrap();
        }
        let chunks: Vec<Vec<u8>> = w.sink.chunks(split).map(<[u8]>::to_vec).collect();

        // Retrying after InsufficientData pulls the next chunk, so every value eventually decodes.
        let mut r = StreamReader::new(ChunkSource::new(chunks));
        let mut decoded = Vec::new();
        let mut failures = 0;
        while decoded.len() < values.len() {
            match r.read_u32() {
                Ok(v) => decoded.push(v),
                Err(Error::InsufficientData { .. }) => {
                    failures += 1;
                    prop_assert!(failures <= w.sink.len());
                }
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
        prop_assert_eq!(&decoded, values);
    }

    #[test]
    fn growable_buffer_concatenates(ref chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..16)) {
        let mut buf = GrowableBuffer::new();
        for chunk in chunks {
            buf.write(chunk).unwrap();
        }
        let expected: Vec<u8> = chunks.concat();
        prop_assert_eq!(buf.capacity(), expected.len());
        prop_assert_eq!(buf.into_vec(), expected);
    }
}
