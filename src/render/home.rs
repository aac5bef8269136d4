use super::partials::{about_company_section, portfolio_section, services_section};
use super::{missing_section, PageRenderer};
use crate::domain::model::SiteContent;
use maud::{html, Markup};

const HERO_BACKGROUND: &str =
    "background-image: url('https://placehold.co/1920x1080/4CAF50/FFFFFF?text=Jardins+Exuberantes');";
const ABOUT_IMAGE: &str = "https://placehold.co/600x400/8BC34A/FFFFFF?text=Equipe+Solar+Paisagismo";

pub struct HomePage;

impl PageRenderer for HomePage {
    fn render(&self, content: &SiteContent) -> Markup {
        let hero = content
            .hero_section
            .as_ref()
            .or_else(|| missing_section("home", "heroSection"));
        let about = content
            .about_company
            .as_ref()
            .or_else(|| missing_section("home", "aboutCompany"));
        let services = content
            .services
            .as_ref()
            .or_else(|| missing_section("home", "services"));
        let portfolio = content
            .portfolio
            .as_ref()
            .or_else(|| missing_section("home", "portfolio"));

        html! {
            @if let Some(hero) = hero {
                section class="relative h-screen bg-cover bg-center flex items-center justify-center text-center p-4 rounded-lg" style=(HERO_BACKGROUND) {
                    div class="absolute inset-0 bg-black opacity-50 rounded-lg" {}
                    div class="relative z-10 text-white max-w-3xl rounded-lg bg-black bg-opacity-40 p-8 shadow-xl" {
                        h1 class="text-5xl font-extrabold leading-tight mb-4 animate-fadeIn" { (hero.title) }
                        p class="text-xl mb-8" { (hero.subtitle) }
                        a href="servicos.html" class="btn-primary" { "Conheça Nossos Serviços" }
                    }
                }
            }
            @if let Some(about) = about {
                (about_company_section(about, Some("sobre"), ABOUT_IMAGE))
            }
            @if let Some(services) = services {
                (services_section(services, Some("servicos")))
            }
            @if let Some(portfolio) = portfolio {
                (portfolio_section(portfolio))
            }
            section class="py-16 bg-green-700 text-white rounded-lg shadow-md mx-auto my-12 max-w-6xl p-8 text-center" {
                h2 class="text-4xl font-bold mb-8" { "Interessado em Nossos Serviços?" }
                p class="text-xl mb-8" { "Entre em contato e solicite um orçamento sem compromisso." }
                a href="faleconosco.html" class="btn-primary bg-white text-green-700 hover:bg-gray-200" { "Fale Conosco Agora!" }
            }
        }
    }
}
