//! Root document component - the complete HTML page
//!
//! [`HomePage`] is the page body and is what the browser app mounts;
//! [`HomeDocument`] wraps it in `<html>` for static rendering.

use leptos::prelude::*;

use super::{HomepageFeatures, HomepageHeader};
use crate::styles::HOME_CSS;
use crate::types::{Feature, SiteConfig, TypewriterConfig};

/// Meta description of the homepage
pub const PAGE_DESCRIPTION: &str =
    "Ease Recruit documentation: set up your recruitment platform and start hiring.";

/// Header region followed by the feature grid.
#[component]
pub fn HomePage(
    /// Title and tagline
    config: SiteConfig,
    /// Cards, in display order
    features: Vec<Feature>,
    /// Tagline animation; the header words when omitted
    #[prop(optional)]
    typewriter: Option<TypewriterConfig>,
) -> impl IntoView {
    view! {
        <HomepageHeader config=config typewriter=typewriter.unwrap_or_default() />
        <main>
            <HomepageFeatures features=features />
        </main>
    }
}

/// The complete HTML document for the homepage
#[component]
pub fn HomeDocument(
    /// Title and tagline; the title also names the page
    config: SiteConfig,
    /// Cards, in display order
    features: Vec<Feature>,
    /// Tagline animation; the header words when omitted
    #[prop(optional)]
    typewriter: Option<TypewriterConfig>,
) -> impl IntoView {
    let page_title = format!("Hello from {}", config.title);
    let typewriter = typewriter.unwrap_or_default();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{page_title}</title>
                <style>{HOME_CSS}</style>
            </head>
            <body>
                <HomePage config=config features=features typewriter=typewriter />
            </body>
        </html>
    }
}
