//! Write single page PDF documents in one pass.
//!
//! ```no_run
//! use claywriter::{pdf::Stream, PdfWriter};
//!
//! let file = std::fs::File::create("out.pdf").unwrap();
//! let mut writer = PdfWriter::open(file, 100.0, 200.0);
//! writer.write_object(Stream::new(b"0 0 50 50 re f"));
//! writer.close().unwrap();
//! ```

pub use document::PdfWriter;
pub use error::CwError;
pub use simple_encode::SimpleEncoder;

mod document;
mod error;
pub mod filter;
pub mod pdf;
pub mod resource;
pub mod simple_encode;
pub mod writer;
