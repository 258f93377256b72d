//! Plain text encoding of PDF values.
//!
//! Everything is written in its shortest readable form. Streams are the only
//! values that get transformed, see [`crate::filter`].

pub(crate) mod object;
pub(crate) mod section;

/// Encodes values without object streams or cross-reference streams.
pub struct SimpleEncoder;
