use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{LandingContext, Logo};
use crate::content::{self, CONTACT_EMAIL, FOOTER_COLUMNS, FooterLink, HEADQUARTERS, LEGAL_LINKS};

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let copyright = content::copyright_line(year);

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        div { class: "footer-logo", Logo {} }
                        p { class: "footer-tagline",
                            "Institutional-grade infrastructure for professional B2B social gaming operators."
                        }
                    }

                    for column in FOOTER_COLUMNS.iter() {
                        div { key: "{column.heading}", class: "footer-column",
                            h4 { class: "footer-heading", "{column.heading}" }
                            ul { class: "footer-links",
                                for link in column.links.iter().copied() {
                                    li { key: "{link.label}", FooterAnchor { link } }
                                }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h4 { class: "footer-heading", "Contact" }
                        ul { class: "footer-links",
                            li { class: "footer-email", "{CONTACT_EMAIL}" }
                            li { class: "footer-hq", "{HEADQUARTERS}" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    div { "{copyright}" }
                    div { class: "footer-legal",
                        for label in LEGAL_LINKS.iter() {
                            a {
                                key: "{label}",
                                href: "#",
                                onclick: move |evt: MouseEvent| evt.prevent_default(),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Footer link. Section targets use in-page navigation; placeholders are inert.
#[component]
fn FooterAnchor(link: FooterLink) -> Element {
    let ctx = use_context::<LandingContext>();
    let href = link
        .target
        .map(|section| section.href())
        .unwrap_or_else(|| "#".to_string());

    rsx! {
        a {
            class: "footer-link",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if let Some(section) = link.target {
                    ctx.navigate(section.anchor());
                }
            },
            "{link.label}"
        }
    }
}
