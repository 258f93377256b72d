use crate::{
    pdf::{IndirectObject, Reference},
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

const START_OBJECT: &[u8] = b"obj\n";
const END_OBJECT: &[u8] = b"\nendobj\n";

impl Encoder<Reference> for SimpleEncoder {
    fn write_to(r: &Reference, writer: &mut dyn Writer) {
        writer.write(r.index.to_string().as_bytes());
        writer.write(b" ");
        writer.write(r.generation().to_string().as_bytes());
        writer.write(b" R");
    }
}

impl Encoder<IndirectObject> for SimpleEncoder {
    fn write_to(o: &IndirectObject, writer: &mut dyn Writer) {
        writer.write(o.reference.index.to_string().as_bytes());
        writer.write(b" ");
        writer.write(o.reference.generation().to_string().as_bytes());
        writer.write(b" ");
        writer.write(START_OBJECT);
        Self::write_to(&o.object, writer);
        writer.write(END_OBJECT);
    }
}
