pub mod accessibility;
pub mod analytics;
pub mod common;
pub mod decor;
pub mod icon;
pub mod pages;
pub mod performance;
pub mod seo;
pub mod waitlist;

pub use accessibility::{AccessibilityPanel, provide_accessibility_context};
pub use analytics::provide_analytics_context;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use performance::provide_performance_context;
