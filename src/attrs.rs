// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use url::Url;

use crate::{Color, FontDesc, ParagraphStyle};

type BuildHasher = core::hash::BuildHasherDefault<rustc_hash::FxHasher>;

bitflags::bitflags! {
    /// Style of an underline or strikethrough line
    ///
    /// Line styles are a bit set: a pattern and placement can be combined
    /// with a thickness, for example `SINGLE | DOTTED | BY_WORD`.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    #[repr(transparent)]
    pub struct UnderlineStyle: u32 {
        const SINGLE = 1 << 0;
        const DOUBLE = 1 << 1;
        const THICK = 1 << 2;
        const DOTTED = 1 << 3;
        const DASHED = 1 << 4;
        /// Draw the line only under words, not under spaces
        const BY_WORD = 1 << 5;
    }
}

/// A graphical text effect applied by the host renderer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextEffect {
    /// Glyphs appear pressed into the surface
    Letterpress,
}

/// Shadow behind the glyphs of a run
///
/// Always written as one value, never updated field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur_radius: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            color,
        }
    }
}

/// The closed set of recognized text attributes
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttrKey {
    ForegroundColor,
    BackgroundColor,
    Font,
    ParagraphStyle,
    /// Offset of the glyphs from the baseline, in points
    BaselineOffset,
    UnderlineStyle,
    /// Only meaningful together with [`AttrKey::UnderlineStyle`]
    UnderlineColor,
    StrikethroughStyle,
    /// Only meaningful together with [`AttrKey::StrikethroughStyle`]
    StrikethroughColor,
    /// Log of the expansion factor applied to glyphs
    Expansion,
    /// Skew applied to glyphs
    Obliqueness,
    /// Points by which to adjust kern-pair characters, 0 disables kerning
    Kerning,
    Link,
    Shadow,
    /// A negative width strokes and fills the glyphs, a positive width
    /// strokes only
    StrokeWidth,
    StrokeColor,
    TextEffect,
}

/// Value stored under an [`AttrKey`]
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Color(Color),
    Font(FontDesc),
    Paragraph(ParagraphStyle),
    Float(f32),
    Underline(UnderlineStyle),
    Link(Url),
    Shadow(Shadow),
    Effect(TextEffect),
}

impl AttrValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontDesc> {
        match self {
            Self::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::Paragraph(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_underline(&self) -> Option<UnderlineStyle> {
        match self {
            Self::Underline(style) => Some(*style),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Url> {
        match self {
            Self::Link(url) => Some(url),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<&Shadow> {
        match self {
            Self::Shadow(shadow) => Some(shadow),
            _ => None,
        }
    }

    pub fn as_effect(&self) -> Option<TextEffect> {
        match self {
            Self::Effect(effect) => Some(*effect),
            _ => None,
        }
    }
}

/// An attribute set: a mapping from [`AttrKey`] to [`AttrValue`]
///
/// Keys are unique and unordered. Use [`AttrsBuilder`](crate::AttrsBuilder)
/// to populate a set with chained calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    map: HashMap<AttrKey, AttrValue, BuildHasher>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: AttrKey) -> bool {
        self.map.contains_key(&key)
    }

    pub fn get(&self, key: AttrKey) -> Option<&AttrValue> {
        self.map.get(&key)
    }

    pub fn insert(&mut self, key: AttrKey, value: AttrValue) -> Option<AttrValue> {
        self.map.insert(key, value)
    }

    pub fn remove(&mut self, key: AttrKey) -> Option<AttrValue> {
        self.map.remove(&key)
    }

    /// Store `value` under `key`, or remove `key` when `value` is `None`
    pub fn set(&mut self, key: AttrKey, value: Option<AttrValue>) {
        match value {
            Some(value) => {
                self.map.insert(key, value);
            }
            None => {
                self.map.remove(&key);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
        self.map.iter()
    }

    // Typed accessors

    pub fn foreground_color(&self) -> Option<Color> {
        self.get(AttrKey::ForegroundColor)?.as_color()
    }

    pub fn background_color(&self) -> Option<Color> {
        self.get(AttrKey::BackgroundColor)?.as_color()
    }

    pub fn font(&self) -> Option<&FontDesc> {
        self.get(AttrKey::Font)?.as_font()
    }

    pub fn paragraph(&self) -> Option<&ParagraphStyle> {
        self.get(AttrKey::ParagraphStyle)?.as_paragraph()
    }

    pub fn baseline_offset(&self) -> Option<f32> {
        self.get(AttrKey::BaselineOffset)?.as_float()
    }

    pub fn underline(&self) -> Option<UnderlineStyle> {
        self.get(AttrKey::UnderlineStyle)?.as_underline()
    }

    pub fn underline_color(&self) -> Option<Color> {
        self.get(AttrKey::UnderlineColor)?.as_color()
    }

    pub fn strikethrough(&self) -> Option<UnderlineStyle> {
        self.get(AttrKey::StrikethroughStyle)?.as_underline()
    }

    pub fn strikethrough_color(&self) -> Option<Color> {
        self.get(AttrKey::StrikethroughColor)?.as_color()
    }

    pub fn expansion(&self) -> Option<f32> {
        self.get(AttrKey::Expansion)?.as_float()
    }

    pub fn obliqueness(&self) -> Option<f32> {
        self.get(AttrKey::Obliqueness)?.as_float()
    }

    pub fn kerning(&self) -> Option<f32> {
        self.get(AttrKey::Kerning)?.as_float()
    }

    pub fn link(&self) -> Option<&Url> {
        self.get(AttrKey::Link)?.as_link()
    }

    pub fn shadow(&self) -> Option<&Shadow> {
        self.get(AttrKey::Shadow)?.as_shadow()
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.get(AttrKey::StrokeWidth)?.as_float()
    }

    pub fn stroke_color(&self) -> Option<Color> {
        self.get(AttrKey::StrokeColor)?.as_color()
    }

    pub fn text_effect(&self) -> Option<TextEffect> {
        self.get(AttrKey::TextEffect)?.as_effect()
    }

    /// Paragraph style under [`AttrKey::ParagraphStyle`], created on first
    /// access so repeated paragraph edits accumulate onto one value
    pub(crate) fn paragraph_mut(&mut self) -> &mut ParagraphStyle {
        let value = self
            .map
            .entry(AttrKey::ParagraphStyle)
            .or_insert_with(|| AttrValue::Paragraph(ParagraphStyle::default()));
        if !matches!(value, AttrValue::Paragraph(_)) {
            *value = AttrValue::Paragraph(ParagraphStyle::default());
        }
        match value {
            AttrValue::Paragraph(style) => style,
            _ => unreachable!(),
        }
    }
}
