use rich_text::{
    Align, AttrKey, AttrsBuilder, Color, FamilyOwned, FontDesc, LineBreak, Shadow, TextEffect,
    UnderlineStyle,
};
use url::Url;

mod common;

use self::common::StaticResolver;

const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

#[test]
fn build_contains_exactly_the_keys_set() {
    let attrs = AttrsBuilder::new()
        .color(Some(RED))
        .background_color(Some(BLUE))
        .kerning(Some(1.5))
        .build();
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs.foreground_color(), Some(RED));
    assert_eq!(attrs.background_color(), Some(BLUE));
    assert_eq!(attrs.kerning(), Some(1.5));
    assert!(!attrs.contains(AttrKey::Font));
}

#[test]
fn setting_the_same_color_twice_is_idempotent() {
    let once = AttrsBuilder::new().color(Some(RED)).build();
    let twice = AttrsBuilder::new().color(Some(RED)).color(Some(RED)).build();
    assert_eq!(once, twice);
}

#[test]
fn later_color_overwrites_earlier() {
    let attrs = AttrsBuilder::new().color(Some(RED)).color(Some(BLUE)).build();
    assert_eq!(attrs.foreground_color(), Some(BLUE));
    assert_eq!(attrs.len(), 1);
}

#[test]
fn setting_color_to_none_removes_the_key() {
    let attrs = AttrsBuilder::new().color(Some(RED)).color(None).build();
    assert_eq!(attrs.foreground_color(), None);
    assert!(attrs.is_empty());
}

#[test]
fn underline_sets_style_and_color_as_a_pair() {
    let attrs = AttrsBuilder::new()
        .underline(Some(UnderlineStyle::SINGLE), Some(RED))
        .build();
    assert_eq!(attrs.underline(), Some(UnderlineStyle::SINGLE));
    assert_eq!(attrs.underline_color(), Some(RED));
}

#[test]
fn underline_without_color_clears_a_previous_color() {
    // Passing a style but no color stores "no color", it does not preserve
    // one set earlier in the chain.
    let attrs = AttrsBuilder::new()
        .underline(Some(UnderlineStyle::SINGLE), Some(RED))
        .underline(Some(UnderlineStyle::DOUBLE), None)
        .build();
    assert_eq!(attrs.underline(), Some(UnderlineStyle::DOUBLE));
    assert_eq!(attrs.underline_color(), None);
}

#[test]
fn strikethrough_pairs_like_underline() {
    let attrs = AttrsBuilder::new()
        .strikethrough(Some(UnderlineStyle::THICK), Some(BLUE))
        .build();
    assert_eq!(attrs.strikethrough(), Some(UnderlineStyle::THICK));
    assert_eq!(attrs.strikethrough_color(), Some(BLUE));

    let attrs = AttrsBuilder::new()
        .strikethrough(Some(UnderlineStyle::THICK), Some(BLUE))
        .strikethrough(None, None)
        .build();
    assert!(attrs.is_empty());
}

#[test]
fn underline_styles_combine_as_flags() {
    let style = UnderlineStyle::SINGLE | UnderlineStyle::DOTTED | UnderlineStyle::BY_WORD;
    let attrs = AttrsBuilder::new().underline(Some(style), None).build();
    let stored = attrs.underline().unwrap();
    assert!(stored.contains(UnderlineStyle::DOTTED));
    assert!(stored.contains(UnderlineStyle::BY_WORD));
}

#[test]
fn paragraph_setters_accumulate_onto_one_value() {
    let attrs = AttrsBuilder::new()
        .line_spacing(4.0)
        .align(Align::Center)
        .build();
    assert_eq!(attrs.len(), 1, "both setters must share one paragraph value");
    let style = attrs.paragraph().unwrap();
    assert_eq!(style.line_spacing, 4.0);
    assert_eq!(style.align, Some(Align::Center));
}

#[test]
fn line_spacing_is_clamped_to_zero() {
    let attrs = AttrsBuilder::new().line_spacing(-10.0).build();
    assert_eq!(attrs.paragraph().unwrap().line_spacing, 0.0);
}

#[test]
fn line_height_sets_min_and_max() {
    let attrs = AttrsBuilder::new().line_height(24.0).build();
    let style = attrs.paragraph().unwrap();
    assert_eq!(style.min_line_height, 24.0);
    assert_eq!(style.max_line_height, 24.0);

    let attrs = AttrsBuilder::new()
        .min_line_height(20.0)
        .max_line_height(30.0)
        .line_break(LineBreak::TruncateTail)
        .build();
    let style = attrs.paragraph().unwrap();
    assert_eq!(style.min_line_height, 20.0);
    assert_eq!(style.max_line_height, 30.0);
    assert_eq!(style.line_break, LineBreak::TruncateTail);
}

#[test]
fn paragraph_none_removes_the_accumulated_value() {
    let attrs = AttrsBuilder::new()
        .line_spacing(4.0)
        .paragraph(None)
        .build();
    assert!(attrs.is_empty());
}

#[test]
fn outline_stores_negative_width_unmodified() {
    // A negative width means fill and stroke, the sign is for the host to
    // interpret.
    let attrs = AttrsBuilder::new().outline(Some(-2.0), Some(RED)).build();
    assert_eq!(attrs.stroke_width(), Some(-2.0));
    assert_eq!(attrs.stroke_color(), Some(RED));
}

#[test]
fn shadow_is_one_atomic_value() {
    let attrs = AttrsBuilder::new().shadow(1.0, 2.0, 3.0, RED).build();
    assert_eq!(attrs.shadow(), Some(&Shadow::new(1.0, 2.0, 3.0, RED)));

    let attrs = AttrsBuilder::new()
        .shadow(1.0, 2.0, 3.0, RED)
        .remove_shadow()
        .build();
    assert_eq!(attrs.shadow(), None);
}

#[test]
fn letterpress_sets_and_clears_the_effect() {
    let attrs = AttrsBuilder::new().letterpress(true).build();
    assert_eq!(attrs.text_effect(), Some(TextEffect::Letterpress));

    let attrs = AttrsBuilder::new().letterpress(true).letterpress(false).build();
    assert_eq!(attrs.text_effect(), None);
}

#[test]
fn link_sets_and_removes() {
    let url = Url::parse("https://example.com/docs").unwrap();
    let attrs = AttrsBuilder::new().link(Some(url.clone())).build();
    assert_eq!(attrs.link(), Some(&url));

    let attrs = AttrsBuilder::new().link(Some(url)).link(None).build();
    assert_eq!(attrs.link(), None);
}

#[test]
fn numeric_setters_set_and_remove() {
    let attrs = AttrsBuilder::new()
        .baseline_offset(Some(2.0))
        .expansion(Some(0.3))
        .obliqueness(Some(0.25))
        .build();
    assert_eq!(attrs.baseline_offset(), Some(2.0));
    assert_eq!(attrs.expansion(), Some(0.3));
    assert_eq!(attrs.obliqueness(), Some(0.25));

    let attrs = AttrsBuilder::new()
        .baseline_offset(Some(2.0))
        .baseline_offset(None)
        .build();
    assert!(attrs.is_empty());
}

#[test]
fn seeded_builder_keeps_existing_attributes() {
    let seed = AttrsBuilder::new().color(Some(RED)).build();
    let attrs = AttrsBuilder::with(seed).kerning(Some(1.0)).build();
    assert_eq!(attrs.foreground_color(), Some(RED));
    assert_eq!(attrs.kerning(), Some(1.0));
}

#[test]
fn dynamic_font_stores_the_scaled_font() {
    let fonts = StaticResolver {
        scale: 2.0,
        ..StaticResolver::new()
    };
    let base = FontDesc::new(FamilyOwned::SansSerif, 17.0);
    let builder = AttrsBuilder::new().dynamic_font(&fonts, base.clone(), Some(21.0), None);
    assert_eq!(builder.font_desc(), Some(&base.with_size(21.0)));
    let attrs = builder.build();
    assert_eq!(attrs.font(), Some(&base.with_size(21.0)));
}
