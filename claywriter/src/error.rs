use std::fmt::Display;

use crate::resource::FontFormat;

#[derive(Debug)]
pub enum CwError {
    /// The sink or a stream filter failed. The output is incomplete.
    Io(std::io::Error),
    /// A font was handed over in a format that can't be embedded.
    UnsupportedFontFormat(FontFormat),
}

impl Display for CwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CwError::Io(err) => write!(f, "write failed: {}", err),
            CwError::UnsupportedFontFormat(format) => {
                write!(f, "fonts of type {} can't be embedded, only TrueType is supported", format)
            }
        }
    }
}

impl std::error::Error for CwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CwError::Io(err) => Some(err),
            CwError::UnsupportedFontFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CwError {
    fn from(err: std::io::Error) -> Self {
        CwError::Io(err)
    }
}
