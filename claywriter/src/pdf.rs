use std::{fmt::Display, ops::Deref};

use indexmap::IndexMap;

pub use self::{
    object::{Array, CwString, IndirectObject, Name, Reference, Stream},
    trailer::Trailer,
    xref::{FreeObject, UsedObject, Xref, XrefEntry},
};

pub mod document;
pub mod object;
pub mod trailer;
pub mod xref;

/// A value that can be written into a PDF file.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    Bool(bool),
    Null,
    String(CwString),
    Name(Name),
    Reference(Reference),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
}

impl Object {
    pub fn name(&self) -> Option<&Name> {
        if let Self::Name(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn integer(&self) -> Option<i64> {
        if let Self::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(obj) => obj.fmt(f),
            Object::Real(obj) => obj.fmt(f),
            Object::Bool(obj) => obj.fmt(f),
            Object::Null => write!(f, "null"),
            Object::String(obj) => obj.fmt(f),
            Object::Name(obj) => write!(f, "/{}", obj),
            Object::Reference(obj) => obj.fmt(f),
            Object::Array(obj) => obj.fmt(f),
            Object::Dictionary(obj) => write!(f, "Dictionary ({} entries)", obj.len()),
            Object::Stream(obj) => write!(f, "Stream ({} bytes)", obj.data.len()),
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<usize> for Object {
    fn from(v: usize) -> Self {
        // object counts and byte offsets never come close to i64::MAX
        Self::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Object {
    fn from(v: f32) -> Self {
        Self::Real(v.into())
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<CwString> for Object {
    fn from(v: CwString) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Self::Stream(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Bytes {
    fn from(v: &[u8; N]) -> Self {
        Bytes(v.to_vec())
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Dictionaries keep their insertion order so that the written bytes are
/// reproducible.
pub type Dictionary = IndexMap<Name, Object>;
