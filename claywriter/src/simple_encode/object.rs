use crate::{
    pdf::Object,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod number;
pub(crate) mod stream;
pub(crate) mod string;

const TRUE_OBJECT: &[u8] = b"true";
const FALSE_OBJECT: &[u8] = b"false";
const NULL_OBJECT: &[u8] = b"null";

impl Encoder<Object> for SimpleEncoder {
    fn write_to(obj: &Object, writer: &mut dyn Writer) {
        match obj {
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Real(f) => Self::write_to(f, writer),
            Object::Bool(true) => writer.write(TRUE_OBJECT),
            Object::Bool(false) => writer.write(FALSE_OBJECT),
            Object::Null => writer.write(NULL_OBJECT),
            Object::String(str) => Self::write_to(str, writer),
            Object::Name(n) => Self::write_to(n, writer),
            Object::Reference(r) => Self::write_to(r, writer),
            Object::Array(a) => Self::write_to(a, writer),
            Object::Dictionary(d) => Self::write_to(d, writer),
            Object::Stream(s) => Self::write_to(s, writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{CwString, Dictionary, Name, Reference};

    use super::*;

    fn encode(obj: &Object) -> Vec<u8> {
        let mut out = Vec::new();
        SimpleEncoder::write_to(obj, &mut out);
        out
    }

    #[test]
    fn scalars() {
        assert_eq!(encode(&Object::Integer(-42)), b"-42".to_vec());
        assert_eq!(encode(&Object::Real(0.5)), b"0.5".to_vec());
        assert_eq!(encode(&Object::Bool(true)), b"true".to_vec());
        assert_eq!(encode(&Object::Bool(false)), b"false".to_vec());
        assert_eq!(encode(&Object::Null), b"null".to_vec());
        assert_eq!(encode(&Object::Reference(Reference::new(12))), b"12 0 R".to_vec());
    }

    #[test]
    fn nested_values() {
        let mut inner = Dictionary::new();
        inner.insert(Name::from("ca"), Object::Real(0.25));
        let mut outer = Dictionary::new();
        outer.insert(Name::from("GS0"), Object::from(inner));
        outer.insert(
            Name::from("Title"),
            Object::from(vec![Object::from(CwString::from("a(b)")), Object::Integer(3)]),
        );

        assert_eq!(
            encode(&Object::from(outer)),
            br"<</GS0 <</ca 0.25>> /Title [(a\(b\)) 3]>>".to_vec()
        );
    }
}
