use crate::{
    pdf::Name,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Characters that can appear in a name without `#xx` escaping.
pub(crate) fn is_regular(chr: u8) -> bool {
    (b'!'..=b'~').contains(&chr) && !is_delimiter(chr) && chr != b'#'
}

impl Encoder<Name> for SimpleEncoder {
    fn write_to(n: &Name, writer: &mut dyn Writer) {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &c) in n.iter().enumerate() {
            if !is_regular(c) {
                writer.write(&n[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode([c]).as_bytes())
            }
        }
        writer.write(&n[last_write..]);
    }
}
