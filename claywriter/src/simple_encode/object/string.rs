use crate::{
    pdf::CwString,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

impl Encoder<CwString> for SimpleEncoder {
    fn write_to(str: &CwString, writer: &mut dyn Writer) {
        writer.write(b"(");

        let mut last_written_index = 0;
        // check for characters that we need to escape.
        for (index, char) in str.iter().enumerate() {
            let escaped: &[u8] = match char {
                b'\\' => br"\\",
                b'(' => br"\(",
                b')' => br"\)",
                // a raw carriage return would be read as a line feed
                b'\r' => br"\r",
                // skip all others.
                _ => continue,
            };
            writer.write(&str[last_written_index..index]);
            writer.write(escaped);
            last_written_index = index + 1;
        }
        writer.write(&str[last_written_index..]);
        writer.write(b")");
    }
}
