use std::io::Write;

use crate::{
    error::CwError,
    pdf::{
        document::{Catalog, Page, Pages},
        Dictionary, IndirectObject, Name, Object, Reference, Trailer, Xref,
    },
    resource::{self, FontSource, ResourceCache},
    simple_encode::{section::write_footer, SimpleEncoder},
    writer::{Encoder, PositionWriter, Writer},
};

pub(crate) const HEADER: &[u8] = b"%PDF-1.7\n";
/// Comment with bytes above 127, tells transfer tools the file is binary.
pub(crate) const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// Writes a single page PDF document in one pass.
///
/// Objects are written as soon as they are handed over. The byte offset of
/// every object is recorded, so the cross-reference table can be written at
/// the end without seeking. [`PdfWriter::close`] adds the page, the page tree
/// and the catalog and finishes the file.
///
/// Write errors don't surface immediately. The first one is kept, everything
/// after it is skipped and the error is returned by [`PdfWriter::close`].
pub struct PdfWriter<W: Write> {
    output: PositionWriter<W>,
    width: f64,
    height: f64,
    /// Byte offset of object `n` at index `n - 1`.
    offsets: Vec<usize>,
    resources: ResourceCache,
}

impl<W: Write> PdfWriter<W> {
    /// Start a document with a page of `width` x `height` units.
    pub fn open(sink: W, width: f64, height: f64) -> Self {
        let mut output = PositionWriter::new(sink);
        output.write(HEADER);
        output.write(BINARY_MARKER);
        Self {
            output,
            width,
            height,
            offsets: Vec::new(),
            resources: ResourceCache::new(),
        }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.output.position()
    }

    /// Start offsets of all objects written so far, by object number - 1.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn object_count(&self) -> usize {
        self.offsets.len()
    }

    /// Write `object` under the next object number and return its reference.
    pub fn write_object(&mut self, object: impl Into<Object>) -> Reference {
        self.append(object.into())
    }

    /// Name of a graphics state that sets the fill opacity to `alpha`.
    pub fn opacity_resource(&mut self, alpha: f64) -> Name {
        self.resources.opacity(alpha)
    }

    /// Name under which `font` can be selected in content streams.
    ///
    /// The first call for a font writes the font object. Fonts that can't be
    /// embedded are rejected without writing anything.
    pub fn font_resource(&mut self, font: &dyn FontSource) -> Result<Name, CwError> {
        let id = font.id();
        if let Some(name) = self.resources.font_name(id) {
            return Ok(name);
        }

        let object = resource::font_object(font)?;
        let reference = self.append(object);
        Ok(self.resources.insert_font(id, reference))
    }

    /// Write the page, page tree, catalog, cross-reference table and trailer.
    ///
    /// The page lists every object written so far as its content.
    /// Returns the sink, or the first error that occurred while writing.
    pub fn close(mut self) -> Result<W, CwError> {
        log::debug!("Finish document with {} objects", self.offsets.len());

        let page_index = self.next_index();
        // the page tree is written directly after the page
        let pages_ref = Reference::new(page_index + 1);

        let page = Page {
            parent: pages_ref,
            media_box: [0.0, 0.0, self.width, self.height],
            resources: self.resources.dictionary(),
            contents: (1..page_index).map(Reference::new).collect(),
        };
        let page_ref = self.append(Object::from(Dictionary::from(page)));

        let written_pages = self.append(Object::from(Dictionary::from(Pages {
            kids: vec![page_ref],
            count: 1,
        })));
        debug_assert_eq!(written_pages, pages_ref);

        let catalog_ref = self.append(Object::from(Dictionary::from(Catalog { pages: pages_ref })));

        let start_xref = self.output.position();
        SimpleEncoder::write_to(&Xref::from_offsets(&self.offsets), &mut self.output);
        SimpleEncoder::write_to(
            &Trailer {
                size: self.offsets.len(),
                root: catalog_ref,
            },
            &mut self.output,
        );
        write_footer(start_xref, &mut self.output);

        self.output.finish()
    }

    fn next_index(&self) -> u32 {
        // an object count beyond u32 can't be addressed by the xref table anyway
        u32::try_from(self.offsets.len() + 1).unwrap_or(u32::MAX)
    }

    /// Record the offset and write `object` under the next object number.
    fn append(&mut self, object: Object) -> Reference {
        let reference = Reference::new(self.next_index());
        self.offsets.push(self.output.position());
        if self.output.has_failed() {
            log::trace!("object {} is dropped, the sink failed before", reference.index());
        } else {
            log::trace!("write object {} at byte {}", reference.index(), self.output.position());
        }
        SimpleEncoder::write_to(&IndirectObject { reference, object }, &mut self.output);
        reference
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::{
        filter::Filter,
        pdf::{CwString, Stream},
        resource::{EmbeddedFont, FontFormat},
    };

    use super::*;

    /// Accepts `capacity` bytes, then fails every write.
    struct LimitedSink {
        data: Vec<u8>,
        capacity: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let free = self.capacity - self.data.len();
            if free == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = free.min(buf.len());
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).rposition(|w| w == needle)
    }

    fn startxref(out: &[u8]) -> usize {
        let start = rfind(out, b"startxref\n").unwrap() + b"startxref\n".len();
        let end = start + out[start..].iter().position(|&c| c == b'\n').unwrap();
        std::str::from_utf8(&out[start..end]).unwrap().parse().unwrap()
    }

    #[test]
    fn header_is_written_on_open() {
        let writer = PdfWriter::open(Vec::new(), 10.0, 10.0);
        assert_eq!(writer.position(), HEADER.len() + BINARY_MARKER.len());
    }

    #[test]
    fn offsets_point_at_object_headers() {
        let mut writer = PdfWriter::open(Vec::new(), 100.0, 200.0);
        let mut expected = Vec::new();
        for i in 0..3 {
            expected.push(writer.position());
            let r = writer.write_object(Stream::new(format!("content {}", i).into_bytes()));
            assert_eq!(r, Reference::new(i + 1));
        }
        assert_eq!(writer.offsets(), &expected[..]);
        let offsets = writer.offsets().to_vec();

        let out = writer.close().unwrap();
        for (i, offset) in offsets.iter().enumerate() {
            let header = format!("{} 0 obj\n", i + 1);
            assert!(out[*offset..].starts_with(header.as_bytes()));
        }
    }

    #[test]
    fn hello_stream() {
        let mut writer = PdfWriter::open(Vec::new(), 100.0, 200.0);
        let content = writer.write_object(Stream::new(b"hello"));
        assert_eq!(content, Reference::new(1));

        let out = writer.close().unwrap();
        assert!(find(&out, b"1 0 obj\n<</Length 5>>\nstream\nhello\nendstream\nendobj\n").is_some());
        assert!(find(
            &out,
            b"2 0 obj\n<</Type /Page /Parent 3 0 R /MediaBox [0 0 100 200] /Resources <</ExtGState <<>> /Font <<>>>> /Contents [1 0 R]>>\nendobj\n"
        )
        .is_some());
        assert!(find(&out, b"3 0 obj\n<</Type /Pages /Kids [2 0 R] /Count 1>>\nendobj\n").is_some());
        assert!(find(&out, b"4 0 obj\n<</Type /Catalog /Pages 3 0 R>>\nendobj\n").is_some());
        assert!(find(&out, b"xref\n0 5\n").is_some());
        assert!(find(&out, b"trailer\n<</Root 4 0 R /Size 4>>\n").is_some());
        assert!(out.ends_with(b"%%EOF\n"));

        let xref = startxref(&out);
        assert!(out[xref..].starts_with(b"xref\n"));
    }

    #[test]
    fn empty_document() {
        let writer = PdfWriter::open(Vec::new(), 612.0, 792.0);
        let out = writer.close().unwrap();
        assert!(find(&out, b"1 0 obj\n<</Type /Page /Parent 2 0 R").is_some());
        assert!(find(&out, b"/Contents []>>").is_some());
        assert!(find(&out, b"2 0 obj\n<</Type /Pages /Kids [1 0 R] /Count 1>>").is_some());
        assert!(find(&out, b"3 0 obj\n<</Type /Catalog /Pages 2 0 R>>").is_some());
        assert!(find(&out, b"xref\n0 4\n").is_some());
        assert!(find(&out, b"<</Root 3 0 R /Size 3>>").is_some());
    }

    #[test]
    fn opacity_resources_end_up_on_the_page() {
        let mut writer = PdfWriter::open(Vec::new(), 100.0, 100.0);
        let gs = writer.opacity_resource(0.5);
        assert_eq!(writer.opacity_resource(0.5), gs);
        assert_eq!(writer.object_count(), 0);
        writer.write_object(Stream::new(format!("/{} gs 0 0 10 10 re f", gs).into_bytes()));

        let out = writer.close().unwrap();
        assert!(find(&out, b"/Resources <</ExtGState <</GS0 <</ca 0.5>>>> /Font <<>>>>").is_some());
    }

    #[test]
    fn fonts_are_written_once() {
        let font = EmbeddedFont::new("Noto Sans", FontFormat::TrueType, vec![7; 100]);
        let mut writer = PdfWriter::open(Vec::new(), 100.0, 100.0);
        let name = writer.font_resource(&font).unwrap();
        assert_eq!(writer.object_count(), 1);
        assert_eq!(writer.font_resource(&font).unwrap(), name);
        assert_eq!(writer.object_count(), 1);

        let content = writer.write_object(
            Stream::new(format!("BT /{} 12 Tf (Hi) Tj ET", name).into_bytes()).with_filters([Filter::Flate]),
        );
        assert_eq!(content, Reference::new(2));

        let out = writer.close().unwrap();
        assert!(find(&out, b"1 0 obj\n<</Type /Font /Subtype /TrueType /BaseFont /Noto_Sans /Length1 100").is_some());
        assert!(find(&out, b"/Font <</F0 1 0 R>>>> /Contents [1 0 R 2 0 R]>>").is_some());
        assert!(find(&out, b"<</Root 5 0 R /Size 5>>").is_some());
    }

    #[test]
    fn unsupported_font_writes_nothing() {
        let font = EmbeddedFont::new("Web Font", FontFormat::Woff, vec![1; 10]);
        let mut writer = PdfWriter::open(Vec::new(), 100.0, 100.0);
        let position = writer.position();
        assert!(matches!(
            writer.font_resource(&font),
            Err(CwError::UnsupportedFontFormat(FontFormat::Woff))
        ));
        assert_eq!(writer.position(), position);
        assert_eq!(writer.object_count(), 0);
        assert!(writer.close().is_ok());
    }

    #[test]
    fn sink_error_is_reported_on_close() {
        let sink = LimitedSink {
            data: Vec::new(),
            capacity: 40,
        };
        let mut writer = PdfWriter::open(sink, 100.0, 100.0);
        writer.write_object(CwString::from("this object does not fit into the sink"));
        assert_eq!(writer.position(), 40);

        // numbering continues, but nothing reaches the sink anymore
        assert_eq!(writer.write_object(Object::Integer(1)), Reference::new(2));
        assert_eq!(writer.offsets(), &[HEADER.len() + BINARY_MARKER.len(), 40]);
        assert_eq!(writer.position(), 40);

        // fonts still get a name, the font object is lost with the rest
        let font = EmbeddedFont::new("Noto Sans", FontFormat::TrueType, vec![7; 100]);
        let name = writer.font_resource(&font).unwrap();
        assert_eq!(name, Name::from("F0"));
        assert_eq!(writer.font_resource(&font).unwrap(), name);
        assert_eq!(writer.object_count(), 3);
        assert_eq!(writer.position(), 40);

        match writer.close() {
            Err(CwError::Io(err)) => assert_eq!(err.to_string(), "disk full"),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("close should fail"),
        }
    }
}
