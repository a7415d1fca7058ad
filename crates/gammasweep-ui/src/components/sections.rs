//! Content sections between the hero and the footer.

use dioxus::prelude::*;

use crate::components::{FeatureCard, FeatureCardVariant};
use crate::content::{FEATURES, HIGHLIGHT_TILES, PARTNERS, PILLARS, STATS};
use crate::icons::IconSvg;
use crate::navigation::SectionId;

/// Stagger step between list items, in seconds.
const STAGGER_SECS: f32 = 0.1;

fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f32 * STAGGER_SECS)
}

#[component]
pub fn PartnerStrip() -> Element {
    rsx! {
        section { id: SectionId::Partners.anchor(), class: "partners",
            div { class: "container",
                p { class: "eyebrow eyebrow-muted", "Institutional Partnerships Across the Globe" }
                div { class: "partner-row",
                    for (i, name) in PARTNERS.iter().enumerate() {
                        span { key: "{name}", class: "partner-name reveal-fade", style: stagger(i), "{name}" }
                    }
                }
            }
        }
    }
}

/// Services story with the `about` highlight tiles.
#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: SectionId::Services.anchor(), class: "services anchored",
            div { class: "container services-grid",
                div { class: "services-story reveal-up",
                    h2 { class: "section-title",
                        "SaaS DNA. "
                        br {}
                        span { class: "text-brand", "Enterprise Reliability." }
                    }
                    p { class: "section-lede",
                        "The social casino market demands perfection. GammaSweep provides the modular backbone to build, scale, and secure your platform with zero compromise on quality."
                    }
                    div { class: "pillar-list",
                        for pillar in PILLARS.iter() {
                            div { key: "{pillar.title}", class: "pillar",
                                div { class: "pillar-icon",
                                    IconSvg { icon: pillar.icon, class: "icon-lg" }
                                }
                                div { class: "pillar-body",
                                    h4 { class: "pillar-title", "{pillar.title}" }
                                    p { class: "pillar-text", "{pillar.description}" }
                                }
                            }
                        }
                    }
                }

                div { id: SectionId::About.anchor(), class: "tile-grid",
                    for (i, tile) in HIGHLIGHT_TILES.iter().enumerate() {
                        {
                            let offset = if i % 2 == 1 { " tile-offset" } else { "" };
                            let featured = if tile.featured { " featured" } else { "" };
                            rsx! {
                                div {
                                    key: "{tile.label}",
                                    class: "tile {tile.tone.css_class()}{offset} reveal-scale",
                                    style: "animation-delay: {tile.delay}s",
                                    div { class: "tile-value{featured}", "{tile.value}" }
                                    div { class: "tile-label{featured}", "{tile.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeaturesGrid() -> Element {
    rsx! {
        section { id: SectionId::Features.anchor(), class: "features anchored",
            div { class: "container",
                div { class: "features-header",
                    div { class: "eyebrow reveal-up", "Advanced Modules" }
                    h2 { class: "section-title section-title-xl reveal-up", "Technical Mastery." }
                    p { class: "section-lede centered reveal-up", style: "animation-delay: 0.2s",
                        "Our infrastructure handles the complexity so you can focus on user acquisition and brand growth."
                    }
                }

                div { class: "feature-grid",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        div { key: "{feature.title}", class: "reveal-up", style: stagger(i),
                            FeatureCard {
                                title: feature.title,
                                description: feature.description,
                                icon: feature.icon,
                                variant: FeatureCardVariant::Elevated,
                            }
                        }
                    }
                }

                div { class: "stats-band",
                    for stat in STATS.iter() {
                        div { key: "{stat.label}", class: "stats-band-item",
                            span { class: "stats-band-value", "{stat.display()}" }
                            span { class: "stats-band-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Closing call to action.
#[component]
pub fn ContactCta() -> Element {
    rsx! {
        section { id: SectionId::Contact.anchor(), class: "contact anchored",
            div { class: "container",
                div { class: "cta-panel reveal-scale",
                    div { class: "cta-glow" }
                    div { class: "cta-body",
                        h2 { class: "cta-title",
                            "Build Your "
                            br {}
                            span { class: "text-shimmer", "Digital Legacy." }
                        }
                        p { class: "cta-lede",
                            "Partner with GammaSweep to deploy the most sophisticated B2B social gaming business model available today."
                        }
                        div { class: "cta-actions",
                            button { class: "button button-primary button-xl", r#type: "button", "Get Started" }
                            button { class: "button button-outline-light button-xl", r#type: "button", "Contact Sales" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), "animation-delay: 0.0s");
        assert_eq!(stagger(3), "animation-delay: 0.3s");
    }
}
