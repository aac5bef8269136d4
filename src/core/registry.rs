use crate::core::RenderTarget;
use crate::domain::model::SiteContent;
use crate::domain::page::PageId;
use crate::render::{AboutPage, ContactPage, HomePage, PageRenderer, ServicesPage, TeamPage};
use crate::utils::error::Result;

/// Renderer registered for a page. Keep this match free of a wildcard arm so a new
/// `PageId` variant does not compile until it is registered here.
pub fn renderer_for(page: PageId) -> Option<&'static dyn PageRenderer> {
    match page {
        PageId::Home => Some(&HomePage),
        PageId::About => Some(&AboutPage),
        PageId::Services => Some(&ServicesPage),
        PageId::Contact => Some(&ContactPage),
        PageId::Team => Some(&TeamPage),
        PageId::Unknown => None,
    }
}

/// Renders `page` into `target`. Returns `false` when no renderer is registered,
/// in which case the target is left untouched.
pub fn dispatch<T>(page: PageId, content: &SiteContent, target: &mut T) -> Result<bool>
where
    T: RenderTarget + ?Sized,
{
    let Some(renderer) = renderer_for(page) else {
        return Ok(false);
    };

    let markup = renderer.render(content).into_string();
    tracing::debug!("Rendered {:?} page ({} bytes)", page, markup.len());
    target.replace_content(&markup)?;
    Ok(true)
}
