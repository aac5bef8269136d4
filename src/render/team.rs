use super::partials::paragraphs;
use super::{missing_section, PageRenderer};
use crate::domain::model::SiteContent;
use maud::{html, Markup};

pub struct TeamPage;

impl PageRenderer for TeamPage {
    fn render(&self, content: &SiteContent) -> Markup {
        let developer = content
            .about_developer
            .as_ref()
            .or_else(|| missing_section("team", "aboutDeveloper"));

        html! {
            @if let Some(developer) = developer {
                section class="py-16 bg-white rounded-lg shadow-md mx-auto my-12 max-w-6xl p-8" {
                    div class="container mx-auto text-center" {
                        h2 class="section-title" { (developer.title) }
                        div class="md:w-full text-left" {
                            (paragraphs(&developer.paragraphs))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AboutDeveloper;

    #[test]
    fn test_team_page() {
        let content = SiteContent {
            about_developer: Some(AboutDeveloper {
                title: "Sobre o Desenvolvedor".to_string(),
                paragraphs: vec!["Olá!".to_string(), "<b>negrito</b>".to_string()],
            }),
            ..SiteContent::default()
        };

        let markup = TeamPage.render(&content).into_string();

        assert!(markup.contains("Sobre o Desenvolvedor"));
        assert!(markup.contains(">Olá!</p>"));
        assert!(markup.contains("&lt;b&gt;negrito&lt;/b&gt;"));
        assert_eq!(markup.matches("<p ").count(), 2);
    }

    #[test]
    fn test_team_without_data_is_empty() {
        assert_eq!(TeamPage.render(&SiteContent::default()).into_string(), "");
    }
}
