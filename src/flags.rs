//! Bit-packing of named boolean flags.
//!
//! Flag `i` (in insertion order) is stored in byte `i / 8`, at bit `i % 8`, counting from the
//! least-significant bit. `n` flags occupy `ceil(n / 8)` bytes; unused high bits of the last
//! byte are zero.

use crate::error::insufficient_data;
use crate::Result;
use indexmap::IndexMap;

/// An ordered mapping from flag name to value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: IndexMap<String, bool>,
}

impl FlagSet {
    /// Creates an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. A new name is appended at the end of the order; an existing name
    /// keeps its position and the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.flags.insert(name.into(), value)
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    /// Returns `true` if `name` is present and set.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if there are no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    /// Name/value pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FlagSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Number of bytes needed to pack `count` flags.
pub const fn packed_len(count: usize) -> usize {
    count.div_ceil(8)
}

/// Packs `flags` into `ceil(flags.len() / 8)` bytes.
pub fn pack_flags(flags: &FlagSet) -> Vec<u8> {
    let mut buf = vec![0u8; packed_len(flags.len())];
    for (i, (_, value)) in flags.iter().enumerate() {
        if value {
            buf[i / 8] |= 1 << (i % 8);
        }
    }
    buf
}

/// Unpacks one flag per name from `buf`.
///
/// Fails with [`Error::InsufficientData`](crate::Error::InsufficientData) if `buf` is shorter
/// than `ceil(names.len() / 8)` bytes. Extra trailing bytes are ignored.
pub fn unpack_flags<S: AsRef<str>>(buf: &[u8], names: &[S]) -> Result<FlagSet> {
    let needed = packed_len(names.len());
    if buf.len() < needed {
        return Err(insufficient_data(needed, buf.len()));
    }

    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_ref(), (buf[i / 8] >> (i % 8)) & 1 != 0))
        .collect())
}
