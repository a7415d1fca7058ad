//! Fixed navigation bar with theme toggle and mobile menu.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{LandingContext, Logo};
use crate::icons::IconSvg;
use crate::navigation::SectionId;
use crate::presentation;
use crate::scroll::{ScrollObserver, ScrollSignal};
use crate::theme::ThemeToggle;

#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<LandingContext>();
    let scroll = use_context::<ScrollSignal>();
    let scrolled = use_signal(|| false);

    // The subscription lives in this scope and is dropped with it.
    use_hook(move || {
        let mut observer = ScrollObserver::new(ctx.scroll_threshold);
        let mut scrolled = scrolled;
        Rc::new(scroll.subscribe(move |offset| {
            if observer.observe(offset) {
                scrolled.set(observer.is_scrolled());
            }
        }))
    });

    let view = presentation::describe(
        ctx.theme.read().preference(),
        scrolled(),
        *ctx.menu.read(),
    );

    rsx! {
        nav { class: "{view.navbar_class}",
            div { class: "navbar-inner",
                Logo {}

                div { class: "nav-links",
                    for section in SectionId::nav_links().iter().copied() {
                        a {
                            key: "{section}",
                            class: "nav-link",
                            href: "{section.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                ctx.navigate(section.anchor());
                            },
                            "{section}"
                            span { class: "nav-link-underline" }
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    a {
                        class: "nav-cta",
                        href: "{SectionId::Contact.href()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            ctx.navigate(SectionId::Contact.anchor());
                        },
                        "Get Started"
                    }
                    button {
                        class: "menu-button",
                        r#type: "button",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{view.menu_expanded}",
                        onclick: move |_| ctx.toggle_menu(),
                        IconSvg { icon: view.menu_button_icon, class: "icon-md" }
                    }
                }
            }

            div { class: "{view.menu_overlay_class}",
                for section in SectionId::nav_links().iter().copied() {
                    a {
                        key: "mobile-{section}",
                        class: "mobile-menu-link",
                        href: "{section.href()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            ctx.navigate(section.anchor());
                        },
                        "{section}"
                    }
                }
            }
        }
    }
}
