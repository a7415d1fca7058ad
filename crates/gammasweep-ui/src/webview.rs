//! Glue between page state and the live webview document.
//!
//! Everything here goes through `document::eval`; the state types it drives
//! are plain Rust and tested without a document.

use dioxus::prelude::*;

use crate::navigation::{SectionDocument, SectionId};
use crate::presentation::DARK_CLASS;
use crate::scroll::ScrollSignal;
use crate::theme::{ThemePreference, VisualRoot};

/// Forwards every window scroll as `window.scrollY`, plus one initial sample.
const SCROLL_BRIDGE_JS: &str = r#"
if (window.__gammasweepScroll) {
    window.removeEventListener('scroll', window.__gammasweepScroll);
}
window.__gammasweepScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__gammasweepScroll, { passive: true });
dioxus.send(window.scrollY);
await new Promise(() => {});
"#;

const SCROLL_DETACH_JS: &str = r#"
if (window.__gammasweepScroll) {
    window.removeEventListener('scroll', window.__gammasweepScroll);
    window.__gammasweepScroll = undefined;
}
"#;

/// `<html>` element of the webview.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl VisualRoot for DocumentRoot {
    fn apply_theme(&mut self, preference: ThemePreference) {
        document::eval(&format!(
            "document.documentElement.classList.toggle('{DARK_CLASS}', {});",
            preference.is_dark()
        ));
    }
}

/// Head snippet marking `<html>` dark before the first paint.
pub fn initial_root_script(preference: ThemePreference) -> String {
    if preference.is_dark() {
        format!("<script>document.documentElement.classList.add('{DARK_CLASS}');</script>")
    } else {
        String::new()
    }
}

/// The rendered page, as far as navigation is concerned.
#[derive(Clone, Copy, Debug)]
pub struct WebviewDocument {
    rendered: &'static [SectionId],
}

impl WebviewDocument {
    /// Document containing exactly `rendered` anchors.
    pub fn new(rendered: &'static [SectionId]) -> Self {
        Self { rendered }
    }
}

impl SectionDocument for WebviewDocument {
    fn has_anchor(&self, id: &str) -> bool {
        self.rendered.iter().any(|section| section.anchor() == id)
    }

    fn scroll_into_view(&mut self, id: &str) {
        document::eval(&scroll_into_view_script(id));
    }

    fn scroll_to_origin(&mut self) {
        document::eval(SCROLL_TO_ORIGIN_JS);
    }
}

const SCROLL_TO_ORIGIN_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Script scrolling `id` into view.
///
/// `has_anchor` answers from the rendered section list, so the element is
/// looked up again in the live DOM; a missing `hero` still lands on the
/// document origin and any other missing id does nothing.
fn scroll_into_view_script(id: &str) -> String {
    let hero = SectionId::Hero.anchor();
    format!(
        "{{ const el = document.getElementById('{id}'); \
         if (el) {{ el.scrollIntoView({{ behavior: 'smooth', block: 'start' }}); }} \
         else if ('{id}' === '{hero}') {{ {SCROLL_TO_ORIGIN_JS} }} }}"
    )
}

/// Pump window scroll offsets into `signal` until the bridge closes.
pub async fn forward_scroll_samples(signal: ScrollSignal) {
    let mut bridge = document::eval(SCROLL_BRIDGE_JS);
    loop {
        match bridge.recv::<f64>().await {
            Ok(offset) => signal.emit(offset),
            Err(e) => {
                tracing::debug!("Scroll bridge closed: {:?}", e);
                break;
            }
        }
    }
}

/// Remove the window scroll listener installed by [`forward_scroll_samples`].
pub fn detach_scroll_listener() {
    document::eval(SCROLL_DETACH_JS);
}
