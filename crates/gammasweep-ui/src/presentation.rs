//! Maps page state to CSS classes and affordances.
//!
//! Nothing here touches the document; components feed the result straight
//! into their `class:` attributes.

use crate::icons::Icon;
use crate::navigation::MenuState;
use crate::theme::ThemePreference;

/// Class carried by the visual root in dark mode.
pub const DARK_CLASS: &str = "dark";

/// Visual treatment derived from theme, scroll and menu state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub root_class: &'static str,
    pub navbar_class: &'static str,
    pub menu_overlay_class: &'static str,
    pub menu_button_icon: Icon,
    pub menu_expanded: &'static str,
    pub toggle_icon: Icon,
    pub toggle_label: &'static str,
}

/// Compute the presentation for one render.
pub fn describe(theme: ThemePreference, scrolled: bool, menu: MenuState) -> Presentation {
    let (toggle_icon, toggle_label) = toggle_affordance(theme);
    Presentation {
        root_class: root_class(theme),
        navbar_class: navbar_class(scrolled, menu),
        menu_overlay_class: if menu.is_open() {
            "mobile-menu open"
        } else {
            "mobile-menu"
        },
        menu_button_icon: if menu.is_open() { Icon::Close } else { Icon::Menu },
        menu_expanded: if menu.is_open() { "true" } else { "false" },
        toggle_icon,
        toggle_label,
    }
}

/// `dark` in dark mode, empty otherwise.
pub fn root_class(theme: ThemePreference) -> &'static str {
    if theme.is_dark() { DARK_CLASS } else { "" }
}

/// Transparent at the top of the page, solid and blurred once scrolled.
/// An open menu also forces the solid bar so the overlay has a backdrop.
pub fn navbar_class(scrolled: bool, menu: MenuState) -> &'static str {
    if scrolled || menu.is_open() {
        "navbar navbar-solid"
    } else {
        "navbar navbar-transparent"
    }
}

/// Icon and accessible label for the theme toggle.
pub fn toggle_affordance(theme: ThemePreference) -> (Icon, &'static str) {
    match theme {
        ThemePreference::Dark => (Icon::Sun, "Switch to light mode"),
        ThemePreference::Light => (Icon::Moon, "Switch to dark mode"),
    }
}
