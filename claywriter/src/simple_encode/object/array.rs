use crate::{
    pdf::Array,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

impl Encoder<Array> for SimpleEncoder {
    fn write_to(array: &Array, writer: &mut dyn Writer) {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            Self::write_to(item, writer);
        }
        writer.write(b"]");
    }
}
