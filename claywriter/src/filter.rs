//! Reversible encodings for stream payloads.
//!
//! Filters are applied in the order they are listed, every filter consumes the
//! output of the previous one. A reader undoes them in reverse order, which is
//! the order they are named in the stream dictionary.

use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression};

use crate::pdf::{Name, Object};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// zlib/deflate compression.
    Flate,
    /// Binary to printable ASCII, base 85.
    Ascii85,
}

impl Filter {
    /// Name of the matching decode filter.
    pub fn name(&self) -> &'static [u8] {
        match self {
            Filter::Flate => b"FlateDecode",
            Filter::Ascii85 => b"ASCII85Decode",
        }
    }

    pub fn encode(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            Filter::Flate => {
                let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
                encoder.write_all(data)?;
                encoder.finish()
            }
            Filter::Ascii85 => Ok(aw_ascii85::encode(data)),
        }
    }
}

/// Apply all filters, first to last.
pub fn encode(data: &[u8], filters: &[Filter]) -> io::Result<Vec<u8>> {
    let mut filters = filters.iter();
    let mut encoded = match filters.next() {
        Some(first) => first.encode(data)?,
        None => return Ok(data.to_vec()),
    };
    for filter in filters {
        encoded = filter.encode(&encoded)?;
    }
    Ok(encoded)
}

/// Value of the `Filter` entry for a stream encoded with `filters`.
///
/// `None` without filters, a single name for one filter and an array in
/// decode order otherwise.
pub fn filter_entry(filters: &[Filter]) -> Option<Object> {
    match filters {
        [] => None,
        [single] => Some(Object::from(Name::from(single.name()))),
        _ => Some(Object::from(
            filters
                .iter()
                .rev()
                .map(|f| Object::from(Name::from(f.name())))
                .collect::<Vec<_>>(),
        )),
    }
}
