// SPDX-License-Identifier: MIT OR Apache-2.0

use url::Url;

use crate::{
    Align, AttrKey, AttrValue, Attrs, Color, FontDesc, FontResolver, LineBreak, ParagraphStyle,
    Shadow, TextEffect, TextStyle, UnderlineStyle,
};

/// Builds an [`Attrs`] set through a chain of setter calls
///
/// Every setter consumes and returns the builder, so a whole set can be
/// assembled in one expression. Passing `None` to a setter removes the key
/// instead of storing an absent value. Call [`AttrsBuilder::build`] to take
/// the finished set.
///
/// ```
/// use rich_text::{Align, AttrsBuilder, Color, UnderlineStyle};
///
/// let attrs = AttrsBuilder::new()
///     .color(Some(Color::rgb(0x20, 0x20, 0x20)))
///     .underline(Some(UnderlineStyle::SINGLE), None)
///     .align(Align::Center)
///     .line_spacing(2.0)
///     .build();
/// assert_eq!(attrs.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttrsBuilder {
    attrs: Attrs,
}

impl AttrsBuilder {
    /// Create a builder with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with an existing attribute set
    pub fn with(attrs: Attrs) -> Self {
        Self { attrs }
    }

    /// Finish the chain and take the accumulated attribute set
    pub fn build(self) -> Attrs {
        self.attrs
    }

    /// The attribute set accumulated so far
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The font currently set with [`AttrsBuilder::font`] or
    /// [`AttrsBuilder::dynamic_font`]
    pub fn font_desc(&self) -> Option<&FontDesc> {
        self.attrs.font()
    }

    /// Set foreground (text) color
    pub fn color(mut self, color: Option<Color>) -> Self {
        self.attrs
            .set(AttrKey::ForegroundColor, color.map(AttrValue::Color));
        self
    }

    /// Set background color
    pub fn background_color(mut self, color: Option<Color>) -> Self {
        self.attrs
            .set(AttrKey::BackgroundColor, color.map(AttrValue::Color));
        self
    }

    /// Set text font
    pub fn font(mut self, font: Option<FontDesc>) -> Self {
        self.attrs.set(AttrKey::Font, font.map(AttrValue::Font));
        self
    }

    /// Set a font scaled through the host's type system
    ///
    /// `base` is scaled by `fonts`, clamped to `max_size` when given, using
    /// the metrics of `scale_as` when given. The scaled font is stored under
    /// the font key.
    pub fn dynamic_font(
        self,
        fonts: &dyn FontResolver,
        base: FontDesc,
        max_size: Option<f32>,
        scale_as: Option<TextStyle>,
    ) -> Self {
        let font = fonts.scaled_font(&base, max_size, scale_as);
        self.font(Some(font))
    }

    /// Set underline style and color
    ///
    /// The two keys are always written as a pair: passing a style without a
    /// color clears any previously set underline color.
    pub fn underline(mut self, style: Option<UnderlineStyle>, color: Option<Color>) -> Self {
        self.attrs
            .set(AttrKey::UnderlineStyle, style.map(AttrValue::Underline));
        self.attrs
            .set(AttrKey::UnderlineColor, color.map(AttrValue::Color));
        self
    }

    /// Set strikethrough style and color
    ///
    /// Pairs the same way as [`AttrsBuilder::underline`].
    pub fn strikethrough(mut self, style: Option<UnderlineStyle>, color: Option<Color>) -> Self {
        self.attrs
            .set(AttrKey::StrikethroughStyle, style.map(AttrValue::Underline));
        self.attrs
            .set(AttrKey::StrikethroughColor, color.map(AttrValue::Color));
        self
    }

    /// Set offset of the glyphs from the baseline, in points
    pub fn baseline_offset(mut self, offset: Option<f32>) -> Self {
        self.attrs
            .set(AttrKey::BaselineOffset, offset.map(AttrValue::Float));
        self
    }

    /// Set the log of the expansion factor applied to glyphs
    pub fn expansion(mut self, factor: Option<f32>) -> Self {
        self.attrs.set(AttrKey::Expansion, factor.map(AttrValue::Float));
        self
    }

    /// Set the skew applied to glyphs
    pub fn obliqueness(mut self, skew: Option<f32>) -> Self {
        self.attrs.set(AttrKey::Obliqueness, skew.map(AttrValue::Float));
        self
    }

    /// Set the number of points by which to adjust kern-pair characters,
    /// 0 disables kerning
    pub fn kerning(mut self, points: Option<f32>) -> Self {
        self.attrs.set(AttrKey::Kerning, points.map(AttrValue::Float));
        self
    }

    /// Set url link
    pub fn link(mut self, url: Option<Url>) -> Self {
        self.attrs.set(AttrKey::Link, url.map(AttrValue::Link));
        self
    }

    /// Set outline of the text
    ///
    /// A negative width strokes and fills the glyphs. The width is stored as
    /// given, the host interprets the sign.
    pub fn outline(mut self, width: Option<f32>, color: Option<Color>) -> Self {
        self.attrs.set(AttrKey::StrokeWidth, width.map(AttrValue::Float));
        self.attrs.set(AttrKey::StrokeColor, color.map(AttrValue::Color));
        self
    }

    /// Set text shadow
    pub fn shadow(mut self, offset_x: f32, offset_y: f32, blur_radius: f32, color: Color) -> Self {
        self.attrs.set(
            AttrKey::Shadow,
            Some(AttrValue::Shadow(Shadow::new(
                offset_x,
                offset_y,
                blur_radius,
                color,
            ))),
        );
        self
    }

    /// Clear text shadow
    pub fn remove_shadow(mut self) -> Self {
        self.attrs.set(AttrKey::Shadow, None);
        self
    }

    /// Enable or disable the letterpress text effect
    pub fn letterpress(mut self, enabled: bool) -> Self {
        let effect = enabled.then_some(AttrValue::Effect(TextEffect::Letterpress));
        self.attrs.set(AttrKey::TextEffect, effect);
        self
    }

    /// Set or remove the whole paragraph style
    pub fn paragraph(mut self, style: Option<ParagraphStyle>) -> Self {
        self.attrs
            .set(AttrKey::ParagraphStyle, style.map(AttrValue::Paragraph));
        self
    }

    /// Set both min and max line heights of the paragraph style
    pub fn line_height(mut self, line_height: f32) -> Self {
        let style = self.attrs.paragraph_mut();
        style.min_line_height = line_height;
        style.max_line_height = line_height;
        self
    }

    /// Set minimum line height of the paragraph style
    pub fn min_line_height(mut self, line_height: f32) -> Self {
        self.attrs.paragraph_mut().min_line_height = line_height;
        self
    }

    /// Set maximum line height of the paragraph style
    pub fn max_line_height(mut self, line_height: f32) -> Self {
        self.attrs.paragraph_mut().max_line_height = line_height;
        self
    }

    /// Set text alignment of the paragraph style
    pub fn align(mut self, align: Align) -> Self {
        self.attrs.paragraph_mut().align = Some(align);
        self
    }

    /// Set the mode used to break lines of the paragraph style
    pub fn line_break(mut self, mode: LineBreak) -> Self {
        self.attrs.paragraph_mut().line_break = mode;
        self
    }

    /// Set the distance in points between the bottom of one line fragment
    /// and the top of the next, compensated to always be nonnegative
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.attrs.paragraph_mut().line_spacing = spacing.max(0.0);
        self
    }
}
