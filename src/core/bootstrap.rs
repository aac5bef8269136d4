use crate::core::loader::DataLoader;
use crate::core::registry::dispatch;
use crate::core::{ConfigProvider, ContentSource, HostPage};
use crate::domain::page::{resolve_current_page, trailing_segment, PageId};
use crate::utils::error::{ErrorCategory, Result, SiteError};

pub const DEFAULT_CONTAINER_ID: &str = "main-content";
pub const DEFAULT_COMPANY_NAME_CLASS: &str = "company-name";
pub const DEFAULT_SLOGAN_CLASS: &str = "slogan";

/// Ids and classes the host page is expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContract {
    pub container_id: String,
    pub company_name_class: String,
    pub slogan_class: String,
}

impl Default for HostContract {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            company_name_class: DEFAULT_COMPANY_NAME_CLASS.to_string(),
            slogan_class: DEFAULT_SLOGAN_CLASS.to_string(),
        }
    }
}

impl HostContract {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            container_id: config.container_id().to_string(),
            company_name_class: config.company_name_class().to_string(),
            slogan_class: config.slogan_class().to_string(),
        }
    }
}

#[derive(Debug)]
pub enum PopulateOutcome {
    Rendered(PageId),
    /// Nothing was rendered. The reason has already been logged.
    Skipped(SiteError),
}

impl PopulateOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, PopulateOutcome::Rendered(_))
    }
}

pub struct Bootstrapper<S: ContentSource> {
    loader: DataLoader<S>,
    contract: HostContract,
}

impl<S: ContentSource> Bootstrapper<S> {
    pub fn new(loader: DataLoader<S>, contract: HostContract) -> Self {
        Self { loader, contract }
    }

    /// Runs once per page view: load the data, fill the tagged elements and render the
    /// current page into the container. Never fails; problems end up in the log and in
    /// `PopulateOutcome::Skipped`.
    pub async fn populate<H: HostPage>(&self, host: &mut H, location: &str) -> PopulateOutcome {
        match self.try_populate(host, location).await {
            Ok(page) => {
                tracing::info!("✅ Rendered {:?} page for '{}'", page, location);
                PopulateOutcome::Rendered(page)
            }
            Err(e) => {
                match e.category() {
                    // 載入失敗時 DataLoader 已經記錄過
                    ErrorCategory::Load => {}
                    ErrorCategory::Routing => tracing::warn!("⚠️ {}", e),
                    ErrorCategory::Host if matches!(e, SiteError::MissingContainer { .. }) => {
                        tracing::warn!("⚠️ {}. Make sure the host page carries this id.", e)
                    }
                    _ => tracing::error!("❌ Could not populate page: {}", e),
                }
                PopulateOutcome::Skipped(e)
            }
        }
    }

    async fn try_populate<H: HostPage>(&self, host: &mut H, location: &str) -> Result<PageId> {
        let content = self.loader.load().await?;

        let container_id = &self.contract.container_id;
        if !host.has_element_with_id(container_id)? {
            return Err(SiteError::MissingContainer {
                id: container_id.clone(),
            });
        }

        Self::substitute_text(
            host,
            &self.contract.company_name_class,
            content.company_name.as_deref(),
        )?;
        Self::substitute_text(host, &self.contract.slogan_class, content.slogan.as_deref())?;

        let page = resolve_current_page(location);

        let mut container = host
            .container(container_id)?
            .ok_or_else(|| SiteError::MissingContainer {
                id: container_id.clone(),
            })?;

        if !dispatch(page, &content, container.as_mut())? {
            return Err(SiteError::UnknownPage {
                name: trailing_segment(location),
            });
        }

        Ok(page)
    }

    fn substitute_text<H: HostPage>(host: &mut H, class: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(text) => {
                let updated = host.set_text_by_class(class, text)?;
                tracing::debug!("Updated {} element(s) with class '{}'", updated, class);
            }
            None => tracing::debug!("No value for class '{}', leaving elements as they are", class),
        }
        Ok(())
    }
}
