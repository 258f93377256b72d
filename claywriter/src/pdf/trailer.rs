use super::{Dictionary, Name, Object, Reference};

pub const TRAILER: &[u8] = b"trailer";
pub const K_SIZE: &[u8] = b"Size";
pub const K_ROOT: &[u8] = b"Root";

#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    /// Number of objects the document announces.
    pub size: usize,

    /// Reference to the root object.
    pub root: Reference,
}

impl From<Trailer> for Dictionary {
    fn from(trailer: Trailer) -> Self {
        Dictionary::from([
            (Name::from(K_ROOT), Object::from(trailer.root)),
            (Name::from(K_SIZE), Object::from(trailer.size)),
        ])
    }
}
