use crate::pdf::{
    document::{dict_types::PAGES, K_COUNT, K_KIDS, K_TYPE},
    Array, Dictionary, Name, Object, Reference,
};

/// Root of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Pages {
    /// Page tree nodes or pages.
    pub kids: Vec<Reference>,
    /// Number of leafs.
    pub count: usize,
}

impl From<Pages> for Dictionary {
    fn from(pages: Pages) -> Self {
        let mut dict = Dictionary::with_capacity(3);
        dict.insert(Name::from(K_TYPE), Object::from(Name::from(PAGES)));
        dict.insert(
            Name::from(K_KIDS),
            Object::from(pages.kids.into_iter().map(Object::from).collect::<Array>()),
        );
        dict.insert(Name::from(K_COUNT), Object::from(pages.count));
        dict
    }
}
