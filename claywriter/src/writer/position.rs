use std::io::{self, ErrorKind, Write};

use crate::error::CwError;

use super::Writer;

/// Wraps an [`io::Write`] sink and counts the bytes it accepted.
///
/// The first error is kept. Every write after it is ignored, so the position
/// stays at the number of bytes that actually reached the sink.
pub struct PositionWriter<W: Write> {
    inner: W,
    position: usize,
    error: Option<CwError>,
}

impl<W: Write> PositionWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            position: 0,
            error: None,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush the sink and hand it back, or return the first error.
    pub fn finish(mut self) -> Result<W, CwError> {
        if self.error.is_none() {
            if let Err(err) = self.inner.flush() {
                self.fail(err.into());
            }
        }
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.inner),
        }
    }
}

impl<W: Write> Writer for PositionWriter<W> {
    fn write(&mut self, mut buf: &[u8]) {
        if self.error.is_some() {
            return;
        }

        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => {
                    self.fail(io::Error::from(ErrorKind::WriteZero).into());
                    return;
                }
                Ok(n) => {
                    self.position += n;
                    buf = &buf[n..];
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    self.fail(err.into());
                    return;
                }
            }
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn fail(&mut self, err: CwError) {
        if self.error.is_none() {
            log::warn!("Output failed at byte {}: {}", self.position, err);
            self.error = Some(err);
        } else {
            log::debug!("Ignoring subsequent error: {}", err);
        }
    }
}
