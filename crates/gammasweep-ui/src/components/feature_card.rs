use dioxus::prelude::*;

use crate::icons::{Icon, IconSvg};

/// Visual style of a [`FeatureCard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureCardVariant {
    #[default]
    Elevated,
    Outline,
    Flat,
}

impl FeatureCardVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            FeatureCardVariant::Elevated => "feature-card feature-card-elevated",
            FeatureCardVariant::Outline => "feature-card feature-card-outline",
            FeatureCardVariant::Flat => "feature-card feature-card-flat",
        }
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    icon: Icon,
    #[props(default)] variant: FeatureCardVariant,
) -> Element {
    rsx! {
        div { class: "{variant.css_class()}",
            div { class: "feature-card-highlight" }
            div { class: "feature-card-body",
                div { class: "feature-card-icon",
                    IconSvg { icon, class: "icon-xl" }
                }
                h3 { class: "feature-card-title", "{title}" }
                p { class: "feature-card-text", "{description}" }
                div { class: "feature-card-more",
                    "Detailed Specifications"
                    IconSvg { icon: Icon::ArrowRight, class: "icon-sm" }
                }
            }
        }
    }
}
