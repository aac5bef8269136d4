use super::partials::about_company_section;
use super::{missing_section, PageRenderer};
use crate::domain::model::SiteContent;
use maud::{html, Markup};

const ABOUT_IMAGE: &str = "https://placehold.co/600x400/A5D6A7/FFFFFF?text=Jardim+Exemplar";

pub struct AboutPage;

impl PageRenderer for AboutPage {
    fn render(&self, content: &SiteContent) -> Markup {
        let about = content
            .about_company
            .as_ref()
            .or_else(|| missing_section("about", "aboutCompany"));

        html! {
            @if let Some(about) = about {
                (about_company_section(about, None, ABOUT_IMAGE))
            }
        }
    }
}
