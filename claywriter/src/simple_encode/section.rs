use crate::{
    pdf::{trailer::TRAILER, Dictionary, Trailer, Xref, XrefEntry},
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

pub(crate) const XREF: &[u8] = b"xref";
pub(crate) const STARTXREF: &[u8] = b"startxref";
pub(crate) const EOF_MARKER: &[u8] = b"%%EOF";

/// Every table entry is exactly 20 bytes long, including the two byte EOL.
const ENTRY_EOL: &[u8] = b"\r\n";

fn xref_to_tuple(entry: &XrefEntry) -> (usize, usize, u8) {
    match entry {
        XrefEntry::Free(entry) => (entry.next_free, entry.generation, b'f'),
        XrefEntry::Used(entry) => (entry.byte_offset, entry.generation, b'n'),
    }
}

impl Encoder<Xref> for SimpleEncoder {
    /// Writes a single subsection that starts at object 0.
    fn write_to(o: &Xref, writer: &mut dyn Writer) {
        log::trace!("write XRef with {} entries", o.len());

        writer.write(XREF);
        writer.write(format!("\n0 {}\n", o.len()).as_bytes());
        for entry in o.entries() {
            let (offset, generation, kind) = xref_to_tuple(entry);
            writer.write(format!("{:010} {:05} ", offset, generation).as_bytes());
            writer.write(&[kind]);
            writer.write(ENTRY_EOL);
        }
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(trailer: &Trailer, writer: &mut dyn Writer) {
        log::trace!("write Trailer");

        let trailer_dict: Dictionary = trailer.clone().into();
        writer.write(TRAILER);
        writer.write(b"\n");
        Self::write_to(&trailer_dict, writer);
        writer.write(b"\n");
    }
}

/// Writes the pointer to the cross-reference section and the end marker.
pub(crate) fn write_footer(start_xref: usize, writer: &mut dyn Writer) {
    writer.write(STARTXREF);
    writer.write(b"\n");
    writer.write(start_xref.to_string().as_bytes());
    writer.write(b"\n");
    writer.write(EOF_MARKER);
    writer.write(b"\n");
}
