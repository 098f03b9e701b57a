//! CSS for the homepage.
//!
//! Inlined into the document head by [`crate::components::HomeDocument`], so
//! the rendered `index.html` is self-contained. Class names follow the
//! documentation site's theme (`hero`, `container`, `row`, `col--4`, `button`)
//! so the page sits inside the docs chrome without extra rules.
//!
//! ```rust
//! use easerecruit_site::styles::HOME_CSS;
//!
//! let themed = format!("{}\n:root {{ --ifm-color-primary: #7a2eff; }}", HOME_CSS);
//! assert!(themed.contains("--ifm-color-primary"));
//! ```

/// Complete stylesheet for the homepage.
pub const HOME_CSS: &str = r#"
:root {
    --ifm-color-primary: #2e5bff;
    --ifm-color-primary-dark: #1f47e0;
    --ifm-font-color-base: #1c1e21;
    --ifm-background-color: #ffffff;
    --ifm-spacing-horizontal: 1rem;
    --ifm-container-width: 1140px;
    --ifm-font-family-base: system-ui, -apple-system, "Segoe UI", Roboto, Ubuntu, Cantarell, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--ifm-font-family-base);
    color: var(--ifm-font-color-base);
    background: var(--ifm-background-color);
    line-height: 1.65;
}

.container {
    max-width: var(--ifm-container-width);
    margin: 0 auto;
    padding: 0 var(--ifm-spacing-horizontal);
    width: 100%;
}

/* Hero banner */

.hero {
    display: flex;
    align-items: center;
    padding: 4rem 2rem;
}

.hero--primary {
    background-color: var(--ifm-color-primary);
    color: #ffffff;
}

.hero-banner {
    padding: 4rem 0;
    text-align: center;
    position: relative;
    overflow: hidden;
}

.hero__title {
    font-size: 3rem;
    margin: 0 0 1rem;
}

.hero__subtitle {
    font-size: 1.5rem;
    font-weight: normal;
    margin: auto 0;
    padding-bottom: 2rem;
}

.typewriter-words {
    font-weight: bold;
}

.typewriter-cursor {
    display: inline-block;
    margin-left: 2px;
}

.typewriter-cursor.blinking {
    animation: typewriter-blink 1s step-end infinite;
}

@keyframes typewriter-blink {
    50% { opacity: 0; }
}

@media screen and (max-width: 996px) {
    .hero-banner { padding: 2rem; }
    .hero__title { font-size: 2rem; }
}

/* Call to action */

.buttons {
    display: flex;
    align-items: center;
    justify-content: center;
}

.button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 0.4rem;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
}

.button--secondary {
    background: #ebedf0;
    color: var(--ifm-font-color-base);
}

.button--secondary:hover {
    background: #dadde1;
}

.button--lg {
    font-size: 1.2rem;
    padding: 0.6rem 2rem;
}

.button-icon {
    flex-shrink: 0;
}

/* Feature grid */

.features {
    display: flex;
    align-items: center;
    padding: 2rem 0;
    width: 100%;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 calc(var(--ifm-spacing-horizontal) * -1);
}

.col {
    flex: 1 0;
    padding: 0 var(--ifm-spacing-horizontal);
    width: 100%;
}

.col--4 {
    flex: 0 0 33.333%;
    max-width: 33.333%;
}

@media screen and (max-width: 996px) {
    .col--4 { flex-basis: 100%; max-width: 100%; }
}

.text--center {
    text-align: center;
}

.padding-horiz--md {
    padding-left: 1rem;
    padding-right: 1rem;
}

.feature-svg {
    height: 200px;
    width: 200px;
}
"#;
