// SPDX-License-Identifier: MIT OR Apache-2.0

/// Horizontal alignment of a paragraph
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
    Center,
    Justified,
    End,
}

/// How the host breaks lines that do not fit the available width
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineBreak {
    #[default]
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateMiddle,
    TruncateTail,
}

/// Paragraph layout of a run
///
/// Line heights of `0.0` leave the line unconstrained. An alignment of `None`
/// uses the natural alignment of the text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    pub min_line_height: f32,
    pub max_line_height: f32,
    pub align: Option<Align>,
    pub line_break: LineBreak,
    /// Distance in points between the bottom of one line fragment and the
    /// top of the next, never negative
    pub line_spacing: f32,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }
}
