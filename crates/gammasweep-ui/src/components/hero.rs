//! Opening section: pitch, calls to action, headline stats, dashboard.

use dioxus::prelude::*;

use crate::components::{DashboardPreview, LandingContext};
use crate::content::HERO_STATS;
use crate::icons::{Icon, IconSvg};
use crate::navigation::SectionId;

#[component]
pub fn Hero() -> Element {
    let ctx = use_context::<LandingContext>();

    rsx! {
        section { id: SectionId::Hero.anchor(), class: "hero",
            div { class: "container hero-grid",
                div { class: "hero-copy reveal-left",
                    div { class: "hero-badge reveal-up", style: "animation-delay: 0.2s",
                        IconSvg { icon: Icon::Sparkles, class: "icon-xs pulse" }
                        "Scalable Gaming Engine"
                    }

                    h1 { class: "hero-title",
                        "Scale Your "
                        br {}
                        span { class: "text-shimmer", "Social Empire." }
                    }

                    p { class: "hero-lede",
                        "High-performance B2B sweepstakes infrastructure. Engineered for founders who demand institutional-grade reliability and 100% compliance."
                    }

                    div { class: "hero-actions",
                        a {
                            class: "button button-primary",
                            href: "{SectionId::Contact.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                ctx.navigate(SectionId::Contact.anchor());
                            },
                            "Book Discovery"
                        }
                        button {
                            class: "button button-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                ctx.navigate(SectionId::Features.anchor());
                            },
                            "View Technology"
                        }
                    }

                    div { class: "hero-stats",
                        for stat in HERO_STATS.iter() {
                            div { key: "{stat.label}", class: "hero-stat",
                                span { class: "hero-stat-value", "{stat.value}" }
                                span { class: "hero-stat-label", "{stat.label}" }
                            }
                        }
                    }
                }

                div { class: "hero-visual reveal-rise", style: "animation-delay: 0.4s",
                    div { class: "hero-visual-glow" }
                    DashboardPreview {}
                }
            }

            button {
                class: "scroll-cue",
                r#type: "button",
                aria_label: "Scroll to partners",
                onclick: move |_| {
                    ctx.navigate(SectionId::Partners.anchor());
                },
                IconSvg { icon: Icon::ChevronDown, class: "icon-lg" }
            }
        }
    }
}
