/// Cross-reference table of a single PDF section.
///
/// Entries are stored in object-number order starting with object 0, which is
/// always the head of the free list.
#[derive(Debug, Clone, PartialEq)]
pub struct Xref(Vec<XrefEntry>);

impl Xref {
    /// Table for objects `1..=offsets.len()` starting at the given byte
    /// offsets.
    pub fn from_offsets(offsets: &[usize]) -> Self {
        let mut entries = Vec::with_capacity(offsets.len() + 1);
        entries.push(XrefEntry::Free(FreeObject::HEAD));
        entries.extend(offsets.iter().map(|&byte_offset| {
            XrefEntry::Used(UsedObject {
                byte_offset,
                generation: 0,
            })
        }));
        Xref(entries)
    }

    /// Entry `n` describes object `n`.
    pub fn entries(&self) -> &[XrefEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeObject {
    /// Next generation number that should be used
    pub generation: usize,
    /// Next free object number
    pub next_free: usize,
}

impl FreeObject {
    /// Object 0, the head of the free list.
    pub const HEAD: FreeObject = FreeObject {
        generation: 65535,
        next_free: 0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsedObject {
    /// The position of this object in the pdf file in bytes, starting from the
    /// beginning of the PDF.
    pub byte_offset: usize,
    pub generation: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XrefEntry {
    Free(FreeObject),
    Used(UsedObject),
}

impl From<UsedObject> for XrefEntry {
    fn from(v: UsedObject) -> Self {
        Self::Used(v)
    }
}

impl From<FreeObject> for XrefEntry {
    fn from(v: FreeObject) -> Self {
        Self::Free(v)
    }
}
