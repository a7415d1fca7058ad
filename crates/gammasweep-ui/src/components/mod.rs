//! Dioxus components making up the landing page.

pub mod app;
pub mod dashboard;
pub mod feature_card;
pub mod footer;
pub mod hero;
pub mod logo;
pub mod navbar;
pub mod sections;

pub use app::{LandingApp, LandingContext};
pub use dashboard::{ChartGeometry, ChartPoint, DashboardPreview, chart_geometry};
pub use feature_card::{FeatureCard, FeatureCardVariant};
pub use footer::Footer;
pub use hero::Hero;
pub use logo::Logo;
pub use navbar::Navbar;
pub use sections::{ContactCta, FeaturesGrid, PartnerStrip, Services};
