//! In-page navigation: section anchors, the mobile menu, and dispatch.

use std::fmt;
use std::str::FromStr;

/// Named anchor on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Partners,
    Services,
    About,
    Features,
    Contact,
}

impl SectionId {
    /// Element id of the anchor.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Partners => "partners",
            SectionId::Services => "services",
            SectionId::About => "about",
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    /// `#anchor` form used in link hrefs.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// All sections, in page order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Hero,
            SectionId::Partners,
            SectionId::Services,
            SectionId::About,
            SectionId::Features,
            SectionId::Contact,
        ]
    }

    /// Sections linked from the navigation bar.
    pub fn nav_links() -> &'static [SectionId] {
        &[
            SectionId::Services,
            SectionId::About,
            SectionId::Features,
            SectionId::Contact,
        ]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = ();

    /// Accepts `services` and `#services`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        SectionId::all()
            .iter()
            .copied()
            .find(|section| section.anchor() == id)
            .ok_or(())
    }
}

/// Mobile overlay menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Close the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(self, MenuState::Closed).is_open()
    }
}

/// The scrollable document holding the anchors.
pub trait SectionDocument {
    /// Whether an element with this id is rendered.
    fn has_anchor(&self, id: &str) -> bool;

    /// Smooth-scroll the element to the top of the viewport.
    fn scroll_into_view(&mut self, id: &str);

    /// Smooth-scroll to the top of the document.
    fn scroll_to_origin(&mut self);
}

/// What a dispatch did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The anchor existed and was scrolled into view.
    ScrolledToAnchor,
    /// `hero` was missing; scrolled to the document origin instead.
    ScrolledToOrigin,
    /// Nothing to scroll to.
    NoOp,
}

/// Navigate to `target`, closing the mobile menu first.
///
/// `target` is a raw identifier, with or without a leading `#`. Missing
/// anchors are not an error: `hero` falls back to the document origin,
/// anything else does nothing.
pub fn dispatch<D>(target: &str, document: &mut D, menu: &mut MenuState) -> NavOutcome
where
    D: SectionDocument + ?Sized,
{
    let id = target.strip_prefix('#').unwrap_or(target);

    if menu.close() {
        tracing::debug!(target = id, "Closed mobile menu for navigation");
    }

    let outcome = if !id.is_empty() && document.has_anchor(id) {
        document.scroll_into_view(id);
        NavOutcome::ScrolledToAnchor
    } else if id == SectionId::Hero.anchor() {
        document.scroll_to_origin();
        NavOutcome::ScrolledToOrigin
    } else {
        NavOutcome::NoOp
    };

    tracing::debug!(target = id, ?outcome, "In-page navigation");
    outcome
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    enum Scroll {
        #[default]
        None,
        Anchor(String),
        Origin,
    }

    #[derive(Default)]
    struct FakeDocument {
        anchors: HashSet<String>,
        scrolled: Scroll,
    }

    impl FakeDocument {
        fn with(anchors: &[&str]) -> Self {
            Self {
                anchors: anchors.iter().map(|a| a.to_string()).collect(),
                scrolled: Scroll::None,
            }
        }
    }

    impl SectionDocument for FakeDocument {
        fn has_anchor(&self, id: &str) -> bool {
            self.anchors.contains(id)
        }

        fn scroll_into_view(&mut self, id: &str) {
            self.scrolled = Scroll::Anchor(id.to_string());
        }

        fn scroll_to_origin(&mut self) {
            self.scrolled = Scroll::Origin;
        }
    }

    #[test]
    fn test_section_ids_round_trip_through_anchor() {
        for section in SectionId::all() {
            assert_eq!(section.anchor().parse::<SectionId>(), Ok(*section));
        }
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("pricing".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Features.href(), "#features");
    }

    #[test]
    fn test_dispatch_to_present_anchor_closes_menu() {
        let mut doc = FakeDocument::with(&["hero", "services", "contact"]);
        let mut menu = MenuState::Open;

        let outcome = dispatch("services", &mut doc, &mut menu);

        assert_eq!(outcome, NavOutcome::ScrolledToAnchor);
        assert_eq!(doc.scrolled, Scroll::Anchor("services".into()));
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_dispatch_accepts_href_form() {
        let mut doc = FakeDocument::with(&["features"]);
        let mut menu = MenuState::Closed;
        assert_eq!(dispatch("#features", &mut doc, &mut menu), NavOutcome::ScrolledToAnchor);
        assert_eq!(doc.scrolled, Scroll::Anchor("features".into()));
    }

    #[test]
    fn test_dispatch_hero_without_anchor_scrolls_to_origin() {
        let mut doc = FakeDocument::with(&["services"]);
        let mut menu = MenuState::Open;

        let outcome = dispatch("hero", &mut doc, &mut menu);

        assert_eq!(outcome, NavOutcome::ScrolledToOrigin);
        assert_eq!(doc.scrolled, Scroll::Origin);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_dispatch_hero_with_anchor_scrolls_to_anchor() {
        let mut doc = FakeDocument::with(&["hero"]);
        let mut menu = MenuState::Closed;
        assert_eq!(dispatch("hero", &mut doc, &mut menu), NavOutcome::ScrolledToAnchor);
        assert_eq!(doc.scrolled, Scroll::Anchor("hero".into()));
    }

    #[test]
    fn test_dispatch_unknown_is_noop() {
        let mut doc = FakeDocument::with(&["hero", "services"]);
        let mut menu = MenuState::Closed;

        assert_eq!(dispatch("pricing", &mut doc, &mut menu), NavOutcome::NoOp);
        assert_eq!(dispatch("about", &mut doc, &mut menu), NavOutcome::NoOp);
        assert_eq!(dispatch("", &mut doc, &mut menu), NavOutcome::NoOp);
        assert_eq!(doc.scrolled, Scroll::None);
    }

    #[test]
    fn test_noop_dispatch_still_closes_menu() {
        let mut doc = FakeDocument::default();
        let mut menu = MenuState::Open;
        assert_eq!(dispatch("pricing", &mut doc, &mut menu), NavOutcome::NoOp);
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
