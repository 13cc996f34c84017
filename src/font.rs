// SPDX-License-Identifier: MIT OR Apache-2.0

use smol_str::SmolStr;

pub use fontdb::{Family, Stretch, Style, Weight};

/// An owned version of a font [`Family`]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FamilyOwned {
    Serif,
    SansSerif,
    Cursive,
    Fantasy,
    Monospace,
    Name(SmolStr),
}

impl FamilyOwned {
    pub fn new(family: Family<'_>) -> Self {
        match family {
            Family::Serif => Self::Serif,
            Family::SansSerif => Self::SansSerif,
            Family::Cursive => Self::Cursive,
            Family::Fantasy => Self::Fantasy,
            Family::Monospace => Self::Monospace,
            Family::Name(name) => Self::Name(SmolStr::new(name)),
        }
    }

    pub fn as_family(&self) -> Family<'_> {
        match self {
            Self::Serif => Family::Serif,
            Self::SansSerif => Family::SansSerif,
            Self::Cursive => Family::Cursive,
            Self::Fantasy => Family::Fantasy,
            Self::Monospace => Family::Monospace,
            Self::Name(name) => Family::Name(name.as_str()),
        }
    }
}

/// A font descriptor: family, shape, and point size
///
/// This describes a font to the host renderer, it does not load font data.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDesc {
    pub family: FamilyOwned,
    pub stretch: Stretch,
    pub style: Style,
    pub weight: Weight,
    /// Point size
    pub size: f32,
}

impl FontDesc {
    pub fn new(family: FamilyOwned, size: f32) -> Self {
        Self {
            family,
            stretch: Stretch::Normal,
            style: Style::Normal,
            weight: Weight::NORMAL,
            size,
        }
    }

    pub fn stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Return a copy of this descriptor at another point size
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }
}

/// A named text style of the host's scalable type system
///
/// A text style resolves to a concrete font at use time through a
/// [`FontResolver`](crate::FontResolver), which lets text follow the user's
/// preferred content size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextStyle {
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl TextStyle {
    /// All recognized text styles
    pub const ALL: [Self; 10] = [
        Self::Title1,
        Self::Title2,
        Self::Title3,
        Self::Headline,
        Self::Subheadline,
        Self::Body,
        Self::Callout,
        Self::Footnote,
        Self::Caption1,
        Self::Caption2,
    ];

    /// Reference point size at the default content size
    pub const fn point_size(self) -> f32 {
        match self {
            Self::Title1 => 28.0,
            Self::Title2 => 22.0,
            Self::Title3 => 20.0,
            Self::Headline => 17.0,
            Self::Subheadline => 15.0,
            Self::Body => 17.0,
            Self::Callout => 16.0,
            Self::Footnote => 13.0,
            Self::Caption1 => 12.0,
            Self::Caption2 => 11.0,
        }
    }

    /// Reference font weight
    pub const fn weight(self) -> Weight {
        match self {
            Self::Headline => Weight::SEMIBOLD,
            _ => Weight::NORMAL,
        }
    }

    /// True for the later generation of styles (titles and callout) that an
    /// older host may not provide
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            Self::Title1 | Self::Title2 | Self::Title3 | Self::Callout
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Title1 => "title1",
            Self::Title2 => "title2",
            Self::Title3 => "title3",
            Self::Headline => "headline",
            Self::Subheadline => "subheadline",
            Self::Body => "body",
            Self::Callout => "callout",
            Self::Footnote => "footnote",
            Self::Caption1 => "caption1",
            Self::Caption2 => "caption2",
        }
    }
}
