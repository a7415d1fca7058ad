//! Inline SVG icon set (24x24 stroke icons).

use dioxus::prelude::*;

const SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
    Menu,
    Close,
    ChevronDown,
    ArrowRight,
    Sparkles,
    Shield,
    ShieldCheck,
    ShieldAlert,
    Globe,
    Cpu,
    Zap,
    Sliders,
    Headphones,
    LayoutDashboard,
    Play,
}

impl Icon {
    /// Path data making up the icon.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Sparkles => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            Icon::Shield => &[SHIELD],
            Icon::ShieldCheck => &[SHIELD, "m9 12 2 2 4-4"],
            Icon::ShieldAlert => &[SHIELD, "M12 8v4", "M12 16h.01"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Sliders => &[
                "M20 7h-9",
                "M14 17H5",
                "M17 14a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M7 4a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            Icon::Headphones => &[
                "M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3",
            ],
            Icon::LayoutDashboard => &[
                "M3 3h7v9H3z",
                "M14 3h7v5h-7z",
                "M14 12h7v9h-7z",
                "M3 16h7v5H3z",
            ],
            Icon::Play => &["M5 3l16 9-16 9z"],
        }
    }

    /// Solid glyphs are filled instead of stroked.
    pub fn is_solid(&self) -> bool {
        matches!(self, Icon::Play)
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[props(default = "icon")] class: &'static str) -> Element {
    let (fill, stroke) = if icon.is_solid() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "{stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths() {
                path { d: "{d}" }
            }
        }
    }
}
