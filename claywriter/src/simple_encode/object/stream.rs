use crate::{
    filter,
    pdf::{
        document::{K_FILTER, K_LENGTH},
        Name, Object, Stream,
    },
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

const START_STREAM: &[u8] = b"\nstream\n";
const END_STREAM: &[u8] = b"\nendstream";

impl Encoder<Stream> for SimpleEncoder {
    fn write_to(s: &Stream, writer: &mut dyn Writer) {
        let data = match filter::encode(&s.data, &s.filters) {
            Ok(data) => data,
            Err(err) => {
                writer.fail(err.into());
                return;
            }
        };

        // update the dictionary to fit the encoded data
        let mut updated_dict = s.dictionary.clone();
        match filter::filter_entry(&s.filters) {
            Some(entry) => {
                updated_dict.insert(Name::from(K_FILTER), entry);
            }
            None => {
                updated_dict.shift_remove(K_FILTER);
            }
        }
        updated_dict.insert(Name::from(K_LENGTH), Object::from(data.len()));

        Self::write_to(&updated_dict, writer);
        writer.write(START_STREAM);
        writer.write(&data);
        writer.write(END_STREAM);
    }
}
