pub use self::{catalog::Catalog, page::Page, pages::Pages};

pub mod catalog;
pub mod page;
pub mod pages;

/// Dictionary type names
pub(crate) mod dict_types {
    pub const PAGE: &[u8] = b"Page";
    pub const PAGES: &[u8] = b"Pages";
    pub const CATALOG: &[u8] = b"Catalog";
    pub const FONT: &[u8] = b"Font";
}

pub(crate) const K_TYPE: &[u8] = b"Type";
pub(crate) const K_SUBTYPE: &[u8] = b"Subtype";
pub(crate) const K_PARENT: &[u8] = b"Parent";
pub(crate) const K_KIDS: &[u8] = b"Kids";
pub(crate) const K_COUNT: &[u8] = b"Count";
pub(crate) const K_PAGES: &[u8] = b"Pages";
pub(crate) const K_MEDIA_BOX: &[u8] = b"MediaBox";
pub(crate) const K_RESOURCES: &[u8] = b"Resources";
pub(crate) const K_CONTENTS: &[u8] = b"Contents";
pub(crate) const K_LENGTH: &[u8] = b"Length";
pub(crate) const K_FILTER: &[u8] = b"Filter";
pub(crate) const K_EXT_G_STATE: &[u8] = b"ExtGState";
pub(crate) const K_FONT: &[u8] = b"Font";
pub(crate) const K_BASE_FONT: &[u8] = b"BaseFont";
pub(crate) const K_LENGTH1: &[u8] = b"Length1";
/// Non-stroking alpha of a graphics state.
pub(crate) const K_FILL_ALPHA: &[u8] = b"ca";
