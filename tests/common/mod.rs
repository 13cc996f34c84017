#![allow(dead_code)]

use rich_text::{FamilyOwned, FontDesc, FontResolver, TextRun, TextStyle};

/// Fixed-table font resolver.
/// Resolves every style to a deterministic descriptor so tests do not depend
/// on the fonts installed on the machine running them.
pub struct StaticResolver {
    pub scale: f32,
    pub extended_styles: bool,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            extended_styles: true,
        }
    }

    pub fn without_extended_styles() -> Self {
        Self {
            extended_styles: false,
            ..Self::new()
        }
    }
}

impl FontResolver for StaticResolver {
    fn preferred_font(&self, style: TextStyle) -> Option<FontDesc> {
        if style.is_extended() && !self.extended_styles {
            return None;
        }
        Some(
            FontDesc::new(
                FamilyOwned::Name("Fira Sans".into()),
                style.point_size() * self.scale,
            )
            .weight(style.weight()),
        )
    }

    fn scaled_font(
        &self,
        base: &FontDesc,
        max_size: Option<f32>,
        _scale_as: Option<TextStyle>,
    ) -> FontDesc {
        let mut size = base.size * self.scale;
        if let Some(max_size) = max_size {
            size = size.min(max_size);
        }
        base.with_size(size)
    }
}

/// The text run at `index`, failing the test on an image run
pub fn text_run(rich: &rich_text::RichText, index: usize) -> &TextRun {
    match &rich.runs()[index] {
        rich_text::Run::Text(run) => run,
        run => panic!("expected a text run at {index}, found {run:?}"),
    }
}
