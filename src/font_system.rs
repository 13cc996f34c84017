// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use crate::{FamilyOwned, FontDesc, TextStyle};

/// Resolves named text styles and scales fonts through the host's type system
///
/// This is the seam between attribute building and the host toolkit: the
/// resolver decides what font a [`TextStyle`] maps to and how a base font
/// scales with the user's preferred content size. [`FontSystem`] is the
/// built-in resolver, hosts and tests can supply their own.
pub trait FontResolver {
    /// Preferred font for a named text style
    ///
    /// `None` means the style is not available on this host. Failures are
    /// passed through to the caller as-is, nothing is retried or translated.
    fn preferred_font(&self, style: TextStyle) -> Option<FontDesc>;

    /// Scale `base` through the type system
    ///
    /// The size is clamped to `max_size` when given. `scale_as` selects the
    /// metrics of a named style for resolvers that scale styles differently,
    /// the default metrics are used when it is `None`.
    fn scaled_font(
        &self,
        base: &FontDesc,
        max_size: Option<f32>,
        scale_as: Option<TextStyle>,
    ) -> FontDesc;

    /// Whether a named text style is available on this host
    fn supports(&self, style: TextStyle) -> bool {
        self.preferred_font(style).is_some()
    }
}

/// The user's preferred content size category
///
/// [`ContentSize::Large`] is the reference category with a scale factor of
/// one, the others scale all resolved fonts up or down.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum ContentSize {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
}

impl ContentSize {
    /// Font scale factor of this category
    pub const fn factor(self) -> f32 {
        match self {
            Self::ExtraSmall => 0.82,
            Self::Small => 0.88,
            Self::Medium => 0.94,
            Self::Large => 1.0,
            Self::ExtraLarge => 1.12,
            Self::ExtraExtraLarge => 1.24,
            Self::ExtraExtraExtraLarge => 1.35,
        }
    }
}

/// The built-in [`FontResolver`], backed by a fontdb database
///
/// Availability of the extended text styles is resolved once at startup with
/// [`FontSystem::set_extended_styles`] rather than checked per call. The
/// resolver applies one uniform content scale, so `scale_as` does not change
/// its arithmetic, it is forwarded for hosts with per-style metrics.
pub struct FontSystem {
    locale: String,
    db: fontdb::Database,
    scale: f32,
    extended_styles: bool,
}

impl fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSystem")
            .field("locale", &self.locale)
            .field("scale", &self.scale)
            .field("extended_styles", &self.extended_styles)
            .finish_non_exhaustive()
    }
}

impl FontSystem {
    /// Create a new [`FontSystem`] with the system locale and fonts
    pub fn new() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| {
            log::warn!("failed to get system locale, falling back to en-US");
            String::from("en-US")
        });
        log::info!("Locale: {}", locale);

        let mut db = fontdb::Database::new();
        {
            let now = std::time::Instant::now();
            db.load_system_fonts();
            log::info!(
                "Parsed {} font faces in {}ms.",
                db.len(),
                now.elapsed().as_millis()
            );
        }

        Self::new_with_locale_and_db(locale, db)
    }

    /// Create a new [`FontSystem`] with a pre-specified locale and database
    pub fn new_with_locale_and_db(locale: String, db: fontdb::Database) -> Self {
        Self {
            locale,
            db,
            scale: 1.0,
            extended_styles: true,
        }
    }

    /// Get the locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get the database
    pub fn db(&self) -> &fontdb::Database {
        &self.db
    }

    /// Get a mutable reference to the database
    pub fn db_mut(&mut self) -> &mut fontdb::Database {
        &mut self.db
    }

    /// Current content scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the content scale factor directly
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Set the content scale factor from a content size category
    pub fn set_content_size(&mut self, size: ContentSize) {
        self.scale = size.factor();
    }

    /// Whether the extended text styles (titles and callout) resolve
    pub fn extended_styles(&self) -> bool {
        self.extended_styles
    }

    /// Enable or disable the extended text styles
    ///
    /// Resolve this once at startup from the host version instead of
    /// branching at every call site.
    pub fn set_extended_styles(&mut self, enabled: bool) {
        self.extended_styles = enabled;
    }

    fn check_face(&self, font: &FontDesc) {
        let query = fontdb::Query {
            families: &[font.family.as_family()],
            weight: font.weight,
            stretch: font.stretch,
            style: font.style,
        };
        if self.db.query(&query).is_none() {
            log::warn!("no font face matches {:?}", font.family);
        }
    }
}

impl FontResolver for FontSystem {
    fn preferred_font(&self, style: TextStyle) -> Option<FontDesc> {
        if style.is_extended() && !self.extended_styles {
            log::debug!("text style '{}' is not available on this host", style.name());
            return None;
        }
        let font = FontDesc::new(FamilyOwned::SansSerif, style.point_size() * self.scale)
            .weight(style.weight());
        self.check_face(&font);
        Some(font)
    }

    fn scaled_font(
        &self,
        base: &FontDesc,
        max_size: Option<f32>,
        scale_as: Option<TextStyle>,
    ) -> FontDesc {
        let mut size = base.size * self.scale;
        if let Some(max_size) = max_size {
            size = size.min(max_size);
        }
        log::debug!(
            "scaled {:?} from {} to {} with '{}' metrics",
            base.family,
            base.size,
            size,
            scale_as.unwrap_or(TextStyle::Body).name()
        );
        let font = base.with_size(size);
        self.check_face(&font);
        font
    }
}
