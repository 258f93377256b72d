use crate::pdf::{
    document::{dict_types::PAGE, K_CONTENTS, K_MEDIA_BOX, K_PARENT, K_RESOURCES, K_TYPE},
    Array, Dictionary, Name, Object, Reference,
};

/// Leaf of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub parent: Reference,
    /// `[llx lly urx ury]` in default user space units.
    pub media_box: [f64; 4],
    pub resources: Dictionary,
    /// Content streams, concatenated by the reader in this order.
    pub contents: Vec<Reference>,
}

impl From<Page> for Dictionary {
    fn from(page: Page) -> Self {
        Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(PAGE))),
            (Name::from(K_PARENT), Object::from(page.parent)),
            (
                Name::from(K_MEDIA_BOX),
                Object::from(page.media_box.into_iter().map(Object::from).collect::<Array>()),
            ),
            (Name::from(K_RESOURCES), Object::from(page.resources)),
            (
                Name::from(K_CONTENTS),
                Object::from(page.contents.into_iter().map(Object::from).collect::<Array>()),
            ),
        ])
    }
}
