use super::partials::services_section;
use super::{missing_section, PageRenderer};
use crate::domain::model::SiteContent;
use maud::{html, Markup};

pub struct ServicesPage;

impl PageRenderer for ServicesPage {
    fn render(&self, content: &SiteContent) -> Markup {
        let services = content
            .services
            .as_ref()
            .or_else(|| missing_section("services", "services"));

        html! {
            @if let Some(services) = services {
                (services_section(services, None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ServiceItem, ServicesSection};

    #[test]
    fn test_one_card_per_service_in_order() {
        let names = ["Poda", "Plantio", "Manutenção", "Irrigação"];
        let content = SiteContent {
            services: Some(ServicesSection {
                title: "Nossos Serviços".to_string(),
                items: names
                    .iter()
                    .map(|name| ServiceItem {
                        icon: "🌿".to_string(),
                        name: name.to_string(),
                        description: format!("Serviço de {}", name),
                    })
                    .collect(),
            }),
            ..SiteContent::default()
        };

        let markup = ServicesPage.render(&content).into_string();

        assert!(markup.contains("Nossos Serviços"));
        assert_eq!(markup.matches("class=\"card text-center\"").count(), names.len());
        let positions: Vec<usize> = names
            .iter()
            .map(|name| markup.find(&format!(">{}</h3>", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_service_list() {
        let content = SiteContent {
            services: Some(ServicesSection {
                title: "Serviços".to_string(),
                items: vec![],
            }),
            ..SiteContent::default()
        };

        let markup = ServicesPage.render(&content).into_string();
        assert!(markup.contains("Serviços"));
        assert_eq!(markup.matches("card text-center").count(), 0);
    }
}
