use std::fmt::Display;

use crate::pdf::Object;

/// Points to an indirect object by its number.
///
/// This writer never updates objects, so the generation is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    pub(crate) index: u32,
}

impl Reference {
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u16 {
        0
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.index, self.generation())
    }
}

/// An object together with the number it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub reference: Reference,
    pub object: Object,
}

impl Display for IndirectObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Indirect {} {} {{ {} }}", self.reference.index, self.reference.generation(), self.object)
    }
}
