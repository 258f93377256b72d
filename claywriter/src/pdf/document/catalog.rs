use crate::pdf::{
    document::{dict_types::CATALOG, K_PAGES, K_TYPE},
    Dictionary, Name, Object, Reference,
};

/// Root of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Root of the page tree.
    pub pages: Reference,
}

impl From<Catalog> for Dictionary {
    fn from(catalog: Catalog) -> Self {
        Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(CATALOG))),
            (Name::from(K_PAGES), Object::from(catalog.pages)),
        ])
    }
}
