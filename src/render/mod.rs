//! Page templates.
//!
//! Every renderer is a pure function of [`SiteContent`]. Interpolated data is always
//! escaped by `maud`; nothing coming from the data file is spliced in as raw HTML.

pub mod about;
pub mod contact;
pub mod home;
pub mod partials;
pub mod services;
pub mod team;

use crate::domain::model::SiteContent;
use maud::Markup;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use services::ServicesPage;
pub use team::TeamPage;

pub trait PageRenderer: Send + Sync {
    fn render(&self, content: &SiteContent) -> Markup;
}

/// Logs a skipped section. Returns `None` so it can sit at the end of an `Option` chain.
pub(crate) fn missing_section<T>(page: &str, key: &str) -> Option<T> {
    tracing::warn!("⚠️ '{}' missing from site data, skipping section on {} page", key, page);
    None
}
