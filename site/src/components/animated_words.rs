//! Animated word cycle appended to the tagline.
//!
//! Server-rendered markup shows the resting frame. In the browser (`csr`
//! feature) the [`Typewriter`] is driven by a chain of page timeouts, one tick
//! per timeout, and the chain is cut when the component is unmounted.

use leptos::prelude::*;

use crate::typewriter::Typewriter;
use crate::types::TypewriterConfig;

/// The tagline's cycling word with its cursor.
///
/// Without `csr` the resting frame is rendered; with it, the word animates
/// until the machine stops or the component is unmounted.
#[component]
pub fn AnimatedWords(
    /// Words, loop count, speeds and cursor
    config: TypewriterConfig,
) -> impl IntoView {
    let cursor = config.cursor.clone();
    let cursor_class = if cursor.blinking {
        "typewriter-cursor blinking"
    } else {
        "typewriter-cursor"
    };

    view! {
        <span class="typewriter-words">
            <span class="typewriter-text">{typed_text(Typewriter::new(config))}</span>
            {cursor.visible.then(|| view! {
                <span class=cursor_class aria-hidden="true">{cursor.style.clone()}</span>
            })}
        </span>
    }
}

#[cfg(not(feature = "csr"))]
fn typed_text(typewriter: Typewriter) -> impl IntoView {
    typewriter.resting_text().to_string()
}

#[cfg(feature = "csr")]
fn typed_text(typewriter: Typewriter) -> impl IntoView {
    let (text, set_text) = signal(typewriter.text().to_string());
    driver::start(typewriter, set_text);
    move || text.get()
}

#[cfg(feature = "csr")]
mod driver {
    use std::time::Duration;

    use leptos::logging::warn;
    use leptos::prelude::*;

    use crate::ticker::Ticker;
    use crate::typewriter::Typewriter;

    pub(super) fn start(typewriter: Typewriter, text: WriteSignal<String>) {
        let Some(delay) = typewriter.initial_delay() else {
            return;
        };
        let ticker = Ticker::default();
        let on_unmount = ticker.clone();
        on_cleanup(move || on_unmount.teardown());
        schedule(typewriter, text, ticker, delay);
    }

    fn schedule(
        mut typewriter: Typewriter,
        text: WriteSignal<String>,
        ticker: Ticker,
        delay: Duration,
    ) {
        let next = ticker.clone();
        let tick = move || {
            let write = |typed: String| text.try_set(typed).is_none();
            if let Some(delay) = next.tick(&mut typewriter, write) {
                schedule(typewriter, text, next, delay);
            }
        };

        match set_timeout_with_handle(tick, delay) {
            Ok(handle) => ticker.set_pending(move || handle.clear()),
            Err(err) => warn!("typewriter: could not schedule tick: {err:?}"),
        }
    }
}
