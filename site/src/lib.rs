//! # easerecruit-site
//!
//! The Ease Recruit homepage as Leptos components: a hero banner with an
//! animated tagline and a call-to-action link, followed by a feature grid.
//!
//! ## Features
//!
//! - `ssr` (default) - [`render_home`] produces a self-contained static page
//! - `csr` - the tagline's typewriter runs on the browser's timer queue
//!
//! ## Quick Start
//!
//! ```rust
//! use easerecruit_site::{render_home, content::FEATURES, types::SiteConfig};
//!
//! let html = render_home(&SiteConfig::default(), FEATURES);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Seamless Onboarding"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - data shapes (features, site metadata, typewriter config)
//! - [`content`] - the fixed feature list, tagline words and call to action
//! - [`typewriter`] - tick-driven state machine behind the tagline
//! - [`ticker`] - teardown and cancellation around the machine's timer
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering is a single pass with no I/O; illustrations are embedded at
//! compile time, so the same inputs always yield the same bytes.
//!
//! ---
//!
//! (c)2025 The Ease Recruit Team

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod ticker;
pub mod typewriter;
pub mod types;

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

#[cfg(feature = "ssr")]
use components::HomeDocument;
#[cfg(feature = "ssr")]
use types::{Feature, SiteConfig, TypewriterConfig};

/// Render the complete homepage with the default tagline animation.
///
/// # Example
///
/// ```rust
/// use easerecruit_site::{render_home, types::SiteConfig};
///
/// let html = render_home(&SiteConfig::default(), &[]);
/// assert!(html.contains("/docs/intro"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_home(config: &SiteConfig, features: &[Feature]) -> String {
    render_home_with(config, features, &TypewriterConfig::default())
}

/// Render the complete homepage with a custom tagline animation.
///
/// Returns a full HTML document including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_home_with(
    config: &SiteConfig,
    features: &[Feature],
    typewriter: &TypewriterConfig,
) -> String {
    let doc = view! {
        <HomeDocument
            config=config.clone()
            features=features.to_vec()
            typewriter=typewriter.clone()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
