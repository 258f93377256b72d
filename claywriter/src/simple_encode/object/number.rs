use crate::{
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

impl Encoder<f64> for SimpleEncoder {
    fn write_to(f: &f64, writer: &mut dyn Writer) {
        if !f.is_finite() {
            log::warn!("Replacing non-finite number {} with 0", f);
            writer.write(b"0");
        } else if *f == 0.0 {
            // also catches -0
            writer.write(b"0");
        } else {
            // `Display` never uses exponent notation, which PDF doesn't allow.
            writer.write(f.to_string().as_bytes());
        }
    }
}
