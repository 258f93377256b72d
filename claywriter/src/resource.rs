//! Page resources shared between content streams.
//!
//! Every distinct resource gets one short name. Asking for the same resource
//! again returns the name that was handed out first.

use std::hash::Hasher;

use fnv::{FnvHashMap, FnvHasher};

use crate::{
    error::CwError,
    filter::Filter,
    pdf::{
        document::{
            dict_types::FONT, K_BASE_FONT, K_EXT_G_STATE, K_FILL_ALPHA, K_FONT, K_LENGTH1, K_SUBTYPE, K_TYPE,
        },
        Dictionary, Name, Object, Reference, Stream,
    },
};

const GRAPHICS_STATE_PREFIX: &str = "GS";
const FONT_PREFIX: &str = "F";
const TRUE_TYPE: &[u8] = b"TrueType";

/// Stable identity of a font, e.g. a hash of its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    TrueType,
    OpenType,
    Woff,
    Woff2,
}

impl FontFormat {
    pub fn mimetype(&self) -> &'static str {
        match self {
            FontFormat::TrueType => "font/ttf",
            FontFormat::OpenType => "font/otf",
            FontFormat::Woff => "font/woff",
            FontFormat::Woff2 => "font/woff2",
        }
    }

    pub fn from_mimetype(mimetype: &str) -> Option<Self> {
        match mimetype {
            "font/ttf" => Some(FontFormat::TrueType),
            "font/otf" => Some(FontFormat::OpenType),
            "font/woff" => Some(FontFormat::Woff),
            "font/woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub fn is_embeddable(&self) -> bool {
        matches!(self, FontFormat::TrueType)
    }
}

impl std::fmt::Display for FontFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mimetype())
    }
}

/// A font that can be embedded into the document.
pub trait FontSource {
    /// Two fonts with the same id are the same font.
    fn id(&self) -> FontId;
    /// Display name, used as the base font name.
    fn name(&self) -> &str;
    fn format(&self) -> FontFormat;
    /// The complete font file.
    fn data(&self) -> &[u8];
}

/// Font file held in memory, identified by a hash of its name and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFont {
    id: FontId,
    name: String,
    format: FontFormat,
    data: Vec<u8>,
}

impl EmbeddedFont {
    pub fn new(name: impl Into<String>, format: FontFormat, data: Vec<u8>) -> Self {
        let name = name.into();
        let mut hasher = FnvHasher::default();
        hasher.write(name.as_bytes());
        hasher.write(&data);
        Self {
            id: FontId(hasher.finish()),
            name,
            format,
            data,
        }
    }
}

impl FontSource for EmbeddedFont {
    fn id(&self) -> FontId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> FontFormat {
        self.format
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Build the object that embeds `font`.
///
/// Fails for fonts that can't be embedded, nothing is written in that case.
pub fn font_object(font: &dyn FontSource) -> Result<Object, CwError> {
    let format = font.format();
    if !format.is_embeddable() {
        return Err(CwError::UnsupportedFontFormat(format));
    }

    let base_font = font.name().replace(' ', "_");
    let dictionary = Dictionary::from([
        (Name::from(K_TYPE), Object::from(Name::from(FONT))),
        (Name::from(K_SUBTYPE), Object::from(Name::from(TRUE_TYPE))),
        (Name::from(K_BASE_FONT), Object::from(Name::from(base_font))),
        (Name::from(K_LENGTH1), Object::from(font.data().len())),
    ]);

    Ok(Object::from(
        Stream::new(font.data())
            .with_dictionary(dictionary)
            .with_filters([Filter::Flate]),
    ))
}

/// Names handed out for graphics states and fonts.
#[derive(Debug, Default)]
pub struct ResourceCache {
    /// Keyed by the bit pattern of the alpha value.
    graphics_states: FnvHashMap<u64, Name>,
    fonts: FnvHashMap<FontId, Name>,
    ext_g_state: Dictionary,
    font: Dictionary,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the graphics state that sets the fill alpha to `alpha`.
    pub fn opacity(&mut self, alpha: f64) -> Name {
        // -0 and 0 are the same opacity
        let key = (alpha + 0.0).to_bits();
        if let Some(name) = self.graphics_states.get(&key) {
            return name.clone();
        }

        let name = Name::from(format!("{}{}", GRAPHICS_STATE_PREFIX, self.graphics_states.len()));
        log::debug!("New graphics state {} with alpha {}", name, alpha);
        self.graphics_states.insert(key, name.clone());
        self.ext_g_state.insert(
            name.clone(),
            Object::from(Dictionary::from([(Name::from(K_FILL_ALPHA), Object::from(alpha))])),
        );
        name
    }

    pub fn font_name(&self, id: FontId) -> Option<Name> {
        self.fonts.get(&id).cloned()
    }

    /// Register the object a font was written to and return its name.
    ///
    /// Returns the existing name if the font is already known.
    pub fn insert_font(&mut self, id: FontId, reference: Reference) -> Name {
        if let Some(name) = self.fonts.get(&id) {
            return name.clone();
        }

        let name = Name::from(format!("{}{}", FONT_PREFIX, self.fonts.len()));
        log::debug!("New font {} in object {}", name, reference);
        self.fonts.insert(id, name.clone());
        self.font.insert(name.clone(), Object::from(reference));
        name
    }

    pub fn graphics_state_count(&self) -> usize {
        self.ext_g_state.len()
    }

    pub fn font_count(&self) -> usize {
        self.font.len()
    }

    /// Resource dictionary for the page.
    pub fn dictionary(&self) -> Dictionary {
        Dictionary::from([
            (Name::from(K_EXT_G_STATE), Object::from(self.ext_g_state.clone())),
            (Name::from(K_FONT), Object::from(self.font.clone())),
        ])
    }
}
