//! Brand mark in three responsive variants.

use dioxus::prelude::*;

use crate::components::LandingContext;
use crate::icons::{Icon, IconSvg};

/// Wordmark. Clicking it returns to the top of the page.
///
/// Large screens show `GAMMA SWEEP`, medium screens stack the words, small
/// screens show `GS`. Which variant is visible is decided by the stylesheet.
#[component]
pub fn Logo() -> Element {
    let ctx = use_context::<LandingContext>();

    rsx! {
        div {
            class: "logo",
            role: "link",
            aria_label: "Back to top",
            onclick: move |_| ctx.scroll_to_top(),

            div { class: "logo-wide",
                span { class: "logo-word", "Gamma" }
                span { class: "logo-word logo-accent", "Sweep" }
                IconSvg { icon: Icon::Play, class: "logo-glyph" }
            }

            div { class: "logo-stacked",
                span { class: "logo-word", "Gamma" }
                div { class: "logo-stacked-tail",
                    span { class: "logo-word logo-accent", "Sweep" }
                    IconSvg { icon: Icon::Play, class: "logo-glyph logo-glyph-sm" }
                }
            }

            div { class: "logo-compact",
                span { class: "logo-word", "G" }
                span { class: "logo-word logo-accent", "s" }
                IconSvg { icon: Icon::Play, class: "logo-glyph logo-glyph-md" }
            }
        }
    }
}
