//! Feature grid - one card per feature, in the order given

use leptos::prelude::*;

use crate::types::{Feature, Illustration};

/// Feature grid section. An empty list renders an empty row.
#[component]
pub fn HomepageFeatures(
    /// Cards, in display order
    features: Vec<Feature>,
) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {feature_cards(features).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Lazily map features to cards, preserving order.
pub fn feature_cards(features: Vec<Feature>) -> impl Iterator<Item = impl IntoView> {
    features.into_iter().map(|feature| view! { <FeatureCard feature=feature /> })
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let Feature {
        title,
        illustration,
        description,
    } = feature;

    view! {
        <div class="col col--4">
            <div class="text--center">
                <FeatureIllustration illustration=illustration />
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{title.into_owned()}</h3>
                <p>{description.into_owned()}</p>
            </div>
        </div>
    }
}

#[component]
fn FeatureIllustration(illustration: Illustration) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="feature-svg"
            role="img"
            viewBox=illustration.view_box
            data-asset=illustration.asset
            inner_html=illustration.body
        ></svg>
    }
}
