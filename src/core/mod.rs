pub mod bootstrap;
pub mod loader;
pub mod registry;

pub use crate::domain::model::SiteContent;
pub use crate::domain::page::PageId;
pub use crate::domain::ports::{ConfigProvider, ContentSource, HostPage, RenderTarget, Storage};
pub use crate::utils::error::Result;
