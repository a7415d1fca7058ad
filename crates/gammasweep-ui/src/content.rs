//! Static page copy.
//!
//! Ordered, immutable lists rendered as-is by the section components.

use crate::icons::Icon;
use crate::navigation::SectionId;

pub const BRAND: &str = "GammaSweep";
pub const CONTACT_EMAIL: &str = "partnership@gammasweep.com";
pub const HEADQUARTERS: &str = "HQ: London, UK";

/// Card in the technical features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Row in the services story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Value/label pair under the hero copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Colour scheme of a highlight tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileTone {
    Surface,
    Brand,
    Accent,
    Muted,
}

impl TileTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            TileTone::Surface => "tone-surface",
            TileTone::Brand => "tone-brand",
            TileTone::Accent => "tone-accent",
            TileTone::Muted => "tone-muted",
        }
    }
}

/// Square tile in the `about` grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightTile {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: TileTone,
    pub featured: bool,
    /// Entrance delay in seconds.
    pub delay: f32,
}

/// Headline number with an optional suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub suffix: Option<&'static str>,
}

impl Stat {
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix.unwrap_or(""))
    }
}

/// KPI card on the dashboard preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub tone: KpiTone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KpiTone {
    Brand,
    Accent,
    Neutral,
}

impl KpiTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            KpiTone::Brand => "kpi-brand",
            KpiTone::Accent => "kpi-accent",
            KpiTone::Neutral => "kpi-neutral",
        }
    }
}

/// One month of simulated revenue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub value: f64,
}

/// Footer link. `None` targets are placeholders that go nowhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: Option<SectionId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Ready-To-Launch Solutions",
        description: "Launch your social casino in as little as 4-6 weeks with our fully compliant, pre-built gaming platform.",
        icon: Icon::Zap,
    },
    Feature {
        title: "On-Demand Customization",
        description: "Tailor every pixel to your brand. Custom mechanics, API integrations, and white-label options.",
        icon: Icon::Sliders,
    },
    Feature {
        title: "Legal & Compliance",
        description: "Navigate global regulations with our dedicated risk management and licensing assistance teams.",
        icon: Icon::ShieldCheck,
    },
    Feature {
        title: "24/7 Ongoing Support",
        description: "Continuous monitoring, performance optimization, and technical maintenance for peak uptime.",
        icon: Icon::Headphones,
    },
    Feature {
        title: "Admin Dashboard",
        description: "Powerful real-time analytics and player management tools to optimize your revenue flow.",
        icon: Icon::LayoutDashboard,
    },
    Feature {
        title: "Anti-Fraud Systems",
        description: "Advanced fraud detection with machine learning algorithms protecting every transaction.",
        icon: Icon::ShieldAlert,
    },
];

pub const PARTNERS: &[&str] = &[
    "TechCorp Gaming",
    "PlayMax Studios",
    "GrowthVentures",
    "SecurePlay",
    "RapidLaunch",
];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "50+", label: "Partner Operators" },
    HeroStat { value: "4wks", label: "Launch Speed" },
    HeroStat { value: "99.9%", label: "Uptime SLA" },
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Native Compliance Engine",
        description: "Regulatory logic baked into the core. Launch in US and international markets with built-in sweepstakes management.",
        icon: Icon::Globe,
    },
    Pillar {
        title: "Decoupled Architecture",
        description: "Complete API control. Integrate any third-party provider or build custom UI skins on top of our hardened gaming core.",
        icon: Icon::Cpu,
    },
    Pillar {
        title: "Risk Safeguard Layer",
        description: "Advanced player monitoring and fraud prevention. Protect your ecosystem with enterprise-grade security protocols.",
        icon: Icon::Shield,
    },
];

pub const HIGHLIGHT_TILES: &[HighlightTile] = &[
    HighlightTile { value: "99.9%", label: "Uptime SLA", tone: TileTone::Surface, featured: false, delay: 0.0 },
    HighlightTile { value: "24/7", label: "Monitoring", tone: TileTone::Brand, featured: true, delay: 0.1 },
    HighlightTile { value: "4wks", label: "To Market", tone: TileTone::Accent, featured: false, delay: 0.2 },
    HighlightTile { value: "13y", label: "Core Experience", tone: TileTone::Muted, featured: false, delay: 0.3 },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Games Available", value: "3,000", suffix: Some("+") },
    Stat { label: "Active Providers", value: "50", suffix: Some("+") },
    Stat { label: "Successful Deployments", value: "20", suffix: Some("+") },
    Stat { label: "Years Experience", value: "13", suffix: Some("+") },
];

pub const KPIS: &[Kpi] = &[
    Kpi { label: "Sweepstakes Staked", value: "$2.4M", note: "\u{2191} 12.4%", tone: KpiTone::Brand },
    Kpi { label: "Active Users", value: "12,842", note: "Real-time", tone: KpiTone::Accent },
    Kpi { label: "Net Revenue", value: "$482K", note: "This month", tone: KpiTone::Neutral },
];

pub const REVENUE: &[RevenuePoint] = &[
    RevenuePoint { month: "Jan", value: 3200.0 },
    RevenuePoint { month: "Feb", value: 4500.0 },
    RevenuePoint { month: "Mar", value: 4100.0 },
    RevenuePoint { month: "Apr", value: 6200.0 },
    RevenuePoint { month: "May", value: 5800.0 },
    RevenuePoint { month: "Jun", value: 8900.0 },
    RevenuePoint { month: "Jul", value: 9500.0 },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Platform",
        links: &[
            FooterLink { label: "Core Engine", target: Some(SectionId::Hero) },
            FooterLink { label: "Compliance API", target: Some(SectionId::Features) },
            FooterLink { label: "Game Library", target: Some(SectionId::Features) },
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            FooterLink { label: "Documentation", target: None },
            FooterLink { label: "Market Insights", target: None },
            FooterLink { label: "Compliance Hub", target: None },
        ],
    },
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Service Terms"];

/// Footer copyright line.
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {BRAND}. Built for Performance.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_counts() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PARTNERS.len(), 5);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(PILLARS.len(), 3);
        assert_eq!(HIGHLIGHT_TILES.len(), 4);
        assert_eq!(KPIS.len(), 3);
        assert_eq!(REVENUE.len(), 7);
    }

    #[test]
    fn test_one_featured_tile() {
        let featured: Vec<_> = HIGHLIGHT_TILES.iter().filter(|t| t.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].tone, TileTone::Brand);
    }

    #[test]
    fn test_stat_display() {
        assert_eq!(STATS[0].display(), "3,000+");
        let bare = Stat { label: "x", value: "7", suffix: None };
        assert_eq!(bare.display(), "7");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2024), "\u{a9} 2024 GammaSweep. Built for Performance.");
    }
}
