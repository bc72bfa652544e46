//! Core domain models and page logic, independent of the rendering target

pub mod accessibility;
pub mod analytics;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod decor;
pub mod motion;
pub mod performance;
pub mod seo;
pub mod settings;
pub mod waitlist;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use accessibility::{AccessibilityFlag, AccessibilityPreferences};
pub use performance::{PerformanceMode, PerformanceProfile};
pub use settings::ClientSettings;
