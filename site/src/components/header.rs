//! Hero banner: site title, tagline with the word cycle, call to action

use leptos::prelude::*;

use super::{AnimatedWords, ICON_ARROW_FORWARD_CIRCLE, Icon};
use crate::content::CALL_TO_ACTION;
use crate::types::{SiteConfig, TypewriterConfig};

/// Title, tagline with the cycling word, then the call-to-action button.
#[component]
pub fn HomepageHeader(
    /// Title and tagline
    config: SiteConfig,
    /// Word cycle after the tagline
    typewriter: TypewriterConfig,
) -> impl IntoView {
    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{config.title}</h1>
                <p class="hero__subtitle">
                    {config.tagline}
                    " "
                    <AnimatedWords config=typewriter />
                </p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href=CALL_TO_ACTION.href>
                        {CALL_TO_ACTION.label}
                        " "
                        <Icon path=ICON_ARROW_FORWARD_CIRCLE class="button-icon" />
                    </a>
                </div>
            </div>
        </header>
    }
}
