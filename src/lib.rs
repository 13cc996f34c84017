// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Rich Text
//!
//! This library builds text attribute sets and accumulates styled runs for a
//! host rich text renderer. Attribute sets are assembled with chained
//! [`AttrsBuilder`] calls, runs are collected in a [`RichText`] buffer, and
//! named text styles resolve to concrete fonts through a [`FontResolver`]
//! such as the fontdb-backed [`FontSystem`]. Layout, shaping, and rendering
//! stay with the host, this library only describes what to render.
//!
//! ```
//! use rich_text::{AttrsBuilder, Color, FontSystem, RichText, UnderlineStyle};
//!
//! // A FontSystem resolves named text styles to fonts, create one per application
//! let font_system = FontSystem::new();
//!
//! // Build an attribute set with chained setters
//! let attrs = AttrsBuilder::new()
//!     .color(Some(Color::rgb(0xFF, 0x00, 0x00)))
//!     .underline(Some(UnderlineStyle::SINGLE), None)
//!     .line_spacing(4.0)
//!     .build();
//!
//! // Accumulate styled runs in call order
//! let mut rich = RichText::new();
//! rich.append("Warning: ", attrs)
//!     .append_body(&font_system, "fuel level is low");
//!
//! // Hand the runs to the host renderer
//! for run in rich.runs() {
//!     println!("{:?}", run);
//! }
//! ```

pub use self::attrs::*;
mod attrs;

pub use self::builder::*;
mod builder;

pub use self::color::*;
mod color;

pub use self::font::*;
mod font;

pub use self::font_system::*;
mod font_system;

pub use self::paragraph::*;
mod paragraph;

pub use self::rich::*;
mod rich;
