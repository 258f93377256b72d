pub use position::PositionWriter;

use crate::error::CwError;

mod position;

/// Byte sink the encoders write into.
///
/// Writes don't return errors. A sink that can fail keeps the first error
/// and ignores everything written after it, see [`PositionWriter`].
pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;

    /// Report an error that occurred while producing bytes for this sink.
    fn fail(&mut self, err: CwError) {
        log::error!("Dropping error, sink can't record it: {}", err);
    }
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

pub trait Encoder<T> {
    fn write_to(obj: &T, writer: &mut dyn Writer);
}
