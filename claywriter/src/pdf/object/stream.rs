use crate::{
    filter::Filter,
    pdf::{Bytes, Dictionary},
};

/// Stream payload together with the filters it gets encoded with.
///
/// `data` holds the raw bytes. The filters are applied when the stream is
/// written, in the order they are listed.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub filters: Vec<Filter>,
    pub data: Bytes,
}

impl Stream {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            dictionary: Dictionary::new(),
            filters: Vec::new(),
            data: data.into(),
        }
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_filters(mut self, filters: impl Into<Vec<Filter>>) -> Self {
        self.filters = filters.into();
        self
    }
}
