//! Leptos components of the homepage.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument (static render only)
//! └── HomePage
//!     ├── HomepageHeader
//!     │   ├── AnimatedWords
//!     │   └── Icon (call to action arrow)
//!     └── main
//!         └── HomepageFeatures
//!             └── FeatureCard (per feature)
//! ```
//!
//! # Usage
//!
//! Statically, via [`crate::render_home`]. In a browser app, mount
//! [`HomePage`] directly:
//!
//! ```rust,ignore
//! use easerecruit_site::components::HomePage;
//! use easerecruit_site::content::FEATURES;
//!
//! view! { <HomePage config=SiteConfig::default() features=FEATURES.to_vec() /> }
//! ```

mod animated_words;
mod document;
mod features;
mod header;
mod icons;

pub use animated_words::AnimatedWords;
pub use document::{HomeDocument, HomePage, PAGE_DESCRIPTION};
pub use features::{HomepageFeatures, feature_cards};
pub use header::HomepageHeader;
pub use icons::*;
