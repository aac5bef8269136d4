pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{HtmlDocument, LocalStorage};
pub use crate::core::bootstrap::{Bootstrapper, HostContract, PopulateOutcome};
pub use crate::core::loader::{DataLoader, DataSource, FileSource, HttpSource};
pub use crate::domain::model::SiteContent;
pub use crate::domain::page::{resolve_current_page, PageId};
pub use crate::utils::error::{Result, SiteError};
