//! Root component: owns page state and provides it to the tree.

use dioxus::prelude::*;

use crate::components::{ContactCta, FeaturesGrid, Footer, Hero, Navbar, PartnerStrip, Services};
use crate::launch;
use crate::navigation::{self, MenuState, NavOutcome, SectionDocument, SectionId};
use crate::scroll::ScrollSignal;
use crate::theme::{ThemeController, ThemedRoot};
use crate::webview::{self, DocumentRoot, WebviewDocument};

/// Page-wide state shared with every component.
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub theme: Signal<ThemeController>,
    pub menu: Signal<MenuState>,
    pub scroll_threshold: f64,
}

impl LandingContext {
    /// Dispatch in-page navigation against the rendered page.
    pub fn navigate(mut self, target: &str) -> NavOutcome {
        let mut document = WebviewDocument::new(SectionId::all());
        navigation::dispatch(target, &mut document, &mut self.menu.write())
    }

    /// Close the menu and return to the top of the page.
    pub fn scroll_to_top(mut self) {
        self.menu.write().close();
        WebviewDocument::new(SectionId::all()).scroll_to_origin();
    }

    pub fn toggle_menu(mut self) {
        self.menu.write().toggle();
    }
}

#[component]
pub fn LandingApp() -> Element {
    let config = use_hook(launch::config);
    let theme = use_signal(|| launch::take_theme(&mut DocumentRoot));
    let menu = use_signal(MenuState::default);
    let scroll = use_hook(ScrollSignal::new);

    use_context_provider(|| theme);
    use_context_provider(|| LandingContext {
        theme,
        menu,
        scroll_threshold: config.scroll_threshold,
    });
    use_context_provider({
        let scroll = scroll.clone();
        move || scroll
    });

    use_future(move || webview::forward_scroll_samples(scroll.clone()));

    use_drop(|| {
        tracing::info!("Landing page closing");
        webview::detach_scroll_listener();
    });

    rsx! {
        ThemedRoot {
            div { class: "landing-page",
                div { class: "background-mesh",
                    div { class: "blob blob-primary" }
                    div { class: "blob blob-accent" }
                }
                Navbar {}
                main { class: "landing-main grid-pattern",
                    Hero {}
                    PartnerStrip {}
                    Services {}
                    FeaturesGrid {}
                    ContactCta {}
                }
                Footer {}
            }
        }
    }
}
