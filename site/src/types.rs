//! Data types for the homepage content.
//!
//! Everything here is plain data. The page is composed from:
//!
//! - [`SiteConfig`] - title and tagline from the site metadata
//! - [`Feature`] - one card in the feature grid
//! - [`CallToAction`] - the single link under the hero
//! - [`TypewriterConfig`] - the word cycle appended to the tagline
//!
//! # Example
//!
//! ```rust
//! use easerecruit_site::types::{Feature, SiteConfig};
//! use easerecruit_site::content::ONBOARDING_SVG;
//!
//! let config = SiteConfig {
//!     title: "Ease Recruit".into(),
//!     ..Default::default()
//! };
//! let feature = Feature::new("Fast", ONBOARDING_SVG, "Hire in days, not weeks.");
//! assert_eq!(feature.title, "Fast");
//! assert_eq!(config.title, "Ease Recruit");
//! ```

use std::borrow::Cow;
use std::time::Duration;

use serde::Deserialize;

/// Site title used when the metadata does not provide one.
pub const DEFAULT_TITLE: &str = "Ease Recruit";

/// Tagline used when the metadata does not provide one.
pub const DEFAULT_TAGLINE: &str = "The recruitment platform built around your next";

/// The two strings the homepage reads from site metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown as the hero heading
    pub title: String,
    /// Tagline, followed by the animated word cycle
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

/// A bundled vector illustration.
///
/// `body` is the inner markup of the SVG file, embedded at compile time, so a
/// missing asset fails the build rather than the render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Illustration {
    /// Bundled asset path, relative to the crate root
    pub asset: &'static str,
    /// SVG `viewBox` attribute
    pub view_box: &'static str,
    /// Shapes inside the `<svg>` element
    pub body: &'static str,
}

/// One marketed capability, rendered as a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Short display string
    pub title: Cow<'static, str>,
    /// Illustration shown above the title
    pub illustration: Illustration,
    /// Body text under the title
    pub description: Cow<'static, str>,
}

impl Feature {
    /// Build a feature from borrowed or owned strings.
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        illustration: Illustration,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            title: title.into(),
            illustration,
            description: description.into(),
        }
    }
}

/// The navigational link under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    /// Link text
    pub label: &'static str,
    /// Destination path
    pub href: &'static str,
}

/// Cursor drawn after the typed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Draw the cursor at all
    pub visible: bool,
    /// Glyph used for the cursor, `|` by default
    pub style: String,
    /// Blink via CSS animation
    pub blinking: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            visible: true,
            style: "|".to_string(),
            blinking: true,
        }
    }
}

/// Configuration of the animated word sequence.
///
/// `loops` counts full passes over `words`; `0` cycles forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Words typed in order
    pub words: Vec<String>,
    /// Full passes over `words`, `0` for endless
    pub loops: u32,
    /// Cursor after the typed text
    pub cursor: Cursor,
    /// Time per typed character
    pub type_speed: Duration,
    /// Time per deleted character
    pub delete_speed: Duration,
    /// Hold time once a word is fully typed
    pub delay: Duration,
}

impl TypewriterConfig {
    /// Whether the cycle eventually stops.
    pub fn is_finite(&self) -> bool {
        self.loops > 0
    }
}
