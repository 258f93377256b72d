use std::ops::Deref;

/// Literal string. Holds the unescaped bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CwString(Vec<u8>);

impl From<Vec<u8>> for CwString {
    fn from(v: Vec<u8>) -> Self {
        CwString(v)
    }
}

impl From<&[u8]> for CwString {
    fn from(v: &[u8]) -> Self {
        CwString(v.to_vec())
    }
}

impl From<&str> for CwString {
    fn from(s: &str) -> Self {
        CwString(s.as_bytes().to_vec())
    }
}

impl From<String> for CwString {
    fn from(s: String) -> Self {
        CwString(s.into_bytes())
    }
}

impl Deref for CwString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for CwString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CwString")
            .field(&String::from_utf8_lossy(&self.0[..]))
            .finish()
    }
}

impl std::fmt::Display for CwString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &String::from_utf8_lossy(&self.0[..]))
    }
}
