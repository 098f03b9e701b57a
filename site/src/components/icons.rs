//! Inline SVG icons.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_FORWARD_CIRCLE size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// `viewBox` of the path data
    #[prop(default = "0 0 512 512")]
    view_box: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox=view_box
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Right arrow in a filled circle
pub const ICON_ARROW_FORWARD_CIRCLE: &str = "M256 48C141.13 48 48 141.13 48 256s93.13 208 208 208 208-93.13 208-208S370.87 48 256 48zm58.67 219.31l-71.3 71.31a16 16 0 01-22.63-22.63L264.68 272H160a16 16 0 010-32h104.68l-43.94-44a16 16 0 0122.63-22.63l71.3 71.31a16 16 0 010 22.63z";
