// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    Attrs, AttrsBuilder, Color, FontDesc, FontResolver, TextStyle, UnderlineStyle,
};

/// Font scale applied to superscript runs by default
pub const SUPERSCRIPT_FONT_SCALE: f32 = 0.7;

/// Baseline offset in points applied to superscript runs by default
pub const SUPERSCRIPT_BASELINE_OFFSET: f32 = 10.0;

/// The character image runs project to in [`RichText::text`]
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// Handle to a host-provided image
///
/// The handle is host-side state passed through untouched, this crate only
/// reads the native pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image {
    pub handle: usize,
    /// Native width in pixels
    pub width: f32,
    /// Native height in pixels
    pub height: f32,
}

impl Image {
    pub const fn new(handle: usize, width: f32, height: f32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }
}

/// A span of text sharing one attribute set
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub attrs: Attrs,
}

/// An inline image with its display size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageRun {
    pub image: Image,
    /// Display width in points
    pub width: f32,
    /// Display height in points
    pub height: f32,
}

/// One run of a [`RichText`]
#[derive(Clone, Debug, PartialEq)]
pub enum Run {
    Text(TextRun),
    Image(ImageRun),
}

/// Options for [`RichText::append_with`]
///
/// All fields default to unset. `style` is used instead of `font` if both
/// are set. `attrs` seeds the run with additional attributes before the
/// other fields are applied.
#[derive(Clone, Debug, Default)]
pub struct AppendOpts {
    pub color: Option<Color>,
    pub font: Option<FontDesc>,
    pub style: Option<TextStyle>,
    pub underline: Option<UnderlineStyle>,
    pub strikethrough: Option<UnderlineStyle>,
    pub baseline_offset: Option<f32>,
    pub attrs: Attrs,
}

macro_rules! style_appenders {
    ($($name:ident => $style:ident,)+) => {
        $(
            #[doc = concat!("Appends text with the preferred font of [`TextStyle::", stringify!($style), "`]")]
            pub fn $name<T: Into<String>>(
                &mut self,
                fonts: &dyn FontResolver,
                text: T,
            ) -> &mut Self {
                self.append_style(fonts, text, TextStyle::$style)
            }
        )+
    };
}

macro_rules! style_fallback_appenders {
    ($($name:ident => $style:ident,)+) => {
        $(
            #[doc = concat!("Appends text with the preferred font of [`TextStyle::", stringify!($style), "`], or of `fallback` when the style is unavailable")]
            pub fn $name<T: Into<String>>(
                &mut self,
                fonts: &dyn FontResolver,
                text: T,
                fallback: TextStyle,
            ) -> &mut Self {
                self.append_style_or(fonts, text, TextStyle::$style, fallback)
            }
        )+
    };
}

/// An ordered, append-only sequence of styled runs
///
/// This is the accumulating buffer handed to the host's rich text renderer.
/// Every append returns `&mut Self` so runs can be added in one chain. The
/// buffer is single-owner and not meant for concurrent mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    runs: Vec<Run>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer seeded with one run of `text` and `attrs`
    pub fn with_attrs<T: Into<String>>(text: T, attrs: Attrs) -> Self {
        let mut rich = Self::new();
        rich.append(text, attrs);
        rich
    }

    /// Create a buffer seeded with one run of `text` and the output of
    /// `builder`
    pub fn with_builder<T: Into<String>>(text: T, builder: AttrsBuilder) -> Self {
        let mut rich = Self::new();
        rich.append_builder(text, builder);
        rich
    }

    /// The accumulated runs, in append order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Plain text of all runs, with image runs projected as
    /// [`OBJECT_REPLACEMENT_CHARACTER`]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for run in &self.runs {
            match run {
                Run::Text(run) => text.push_str(&run.text),
                Run::Image(_) => text.push(OBJECT_REPLACEMENT_CHARACTER),
            }
        }
        text
    }

    /// Appends text with the given attributes
    ///
    /// Empty text and an empty attribute set are both legal.
    pub fn append<T: Into<String>>(&mut self, text: T, attrs: Attrs) -> &mut Self {
        self.runs.push(Run::Text(TextRun {
            text: text.into(),
            attrs,
        }));
        self
    }

    /// Appends text with the attributes built so far by `builder`
    pub fn append_builder<T: Into<String>>(&mut self, text: T, builder: AttrsBuilder) -> &mut Self {
        self.append(text, builder.build())
    }

    /// Appends text styled from [`AppendOpts`]
    ///
    /// Builds the attribute set from `opts.attrs` and the remaining options
    /// in order: font, color, underline, baseline offset, strikethrough.
    /// When `opts.style` is set the explicit `opts.font` is ignored, even if
    /// the style fails to resolve. The underline and strikethrough passes
    /// carry no color, so seeded decoration colors are cleared.
    pub fn append_with<T: Into<String>>(
        &mut self,
        fonts: &dyn FontResolver,
        text: T,
        opts: AppendOpts,
    ) -> &mut Self {
        let font = match opts.style {
            Some(style) => fonts.preferred_font(style),
            None => opts.font,
        };
        let attrs = AttrsBuilder::with(opts.attrs)
            .font(font)
            .color(opts.color)
            .underline(opts.underline, None)
            .baseline_offset(opts.baseline_offset)
            .strikethrough(opts.strikethrough, None)
            .build();
        self.append(text, attrs)
    }

    /// Appends text with the preferred font of a named text style
    ///
    /// When the style does not resolve the run carries no font attribute.
    pub fn append_style<T: Into<String>>(
        &mut self,
        fonts: &dyn FontResolver,
        text: T,
        style: TextStyle,
    ) -> &mut Self {
        self.append_with(
            fonts,
            text,
            AppendOpts {
                style: Some(style),
                ..AppendOpts::default()
            },
        )
    }

    /// Appends text with a named text style, using `fallback` when `style`
    /// is unavailable on this host
    pub fn append_style_or<T: Into<String>>(
        &mut self,
        fonts: &dyn FontResolver,
        text: T,
        style: TextStyle,
        fallback: TextStyle,
    ) -> &mut Self {
        if fonts.supports(style) {
            self.append_style(fonts, text, style)
        } else {
            self.append_style(fonts, text, fallback)
        }
    }

    style_appenders! {
        append_title1 => Title1,
        append_title2 => Title2,
        append_title3 => Title3,
        append_callout => Callout,
        append_subheadline => Subheadline,
        append_caption1 => Caption1,
        append_caption2 => Caption2,
        append_headline => Headline,
        append_footnote => Footnote,
        append_body => Body,
    }

    style_fallback_appenders! {
        append_title1_or => Title1,
        append_title2_or => Title2,
        append_title3_or => Title3,
        append_callout_or => Callout,
    }

    /// Appends superscript text with the default font scale and baseline
    /// offset
    pub fn append_superscript<T: Into<String>>(&mut self, text: T, font: FontDesc) -> &mut Self {
        self.append_superscript_with(
            text,
            font,
            SUPERSCRIPT_FONT_SCALE,
            SUPERSCRIPT_BASELINE_OFFSET,
        )
    }

    /// Appends superscript text with the font copied at
    /// `size * font_scale` and offset from the baseline
    pub fn append_superscript_with<T: Into<String>>(
        &mut self,
        text: T,
        font: FontDesc,
        font_scale: f32,
        baseline_offset: f32,
    ) -> &mut Self {
        let font = font.with_size(font.size * font_scale);
        let attrs = AttrsBuilder::new()
            .font(Some(font))
            .baseline_offset(Some(baseline_offset))
            .build();
        self.append(text, attrs)
    }

    /// Appends an inline image
    ///
    /// With a target height the display width preserves the image's aspect
    /// ratio, without one the native size is used unmodified.
    pub fn append_image(&mut self, image: Image, target_height: Option<f32>) -> &mut Self {
        let (width, height) = match target_height {
            Some(target) => (image.width / image.height * target, target),
            None => (image.width, image.height),
        };
        self.runs.push(Run::Image(ImageRun {
            image,
            width,
            height,
        }));
        self
    }

    /// Appends all runs of another buffer, in order
    pub fn append_rich(&mut self, other: &Self) -> &mut Self {
        self.runs.extend_from_slice(&other.runs);
        self
    }
}
