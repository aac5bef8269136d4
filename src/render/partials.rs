use crate::domain::model::{AboutCompany, PortfolioItem, PortfolioSection, ServiceItem, ServicesSection};
use maud::{html, Markup};
use url::form_urlencoded;

const PARAGRAPH_CLASS: &str = "text-lg leading-relaxed text-gray-700 mb-4";
const SECTION_CLASS: &str = "rounded-lg shadow-md mx-auto my-12 max-w-6xl p-8";

pub fn paragraphs(paragraphs: &[String]) -> Markup {
    html! {
        @for paragraph in paragraphs {
            p class=(PARAGRAPH_CLASS) { (paragraph) }
        }
    }
}

pub fn about_company_section(about: &AboutCompany, anchor: Option<&str>, image_url: &str) -> Markup {
    html! {
        section id=[anchor] class={ "py-16 bg-white " (SECTION_CLASS) } {
            div class="container mx-auto text-center" {
                h2 class="section-title" { (about.title) }
                div class="flex flex-col md:flex-row items-center justify-center md:space-x-8" {
                    div class="md:w-1/2 mb-6 md:mb-0" {
                        img src=(image_url) alt=(about.image_alt) class="rounded-lg shadow-lg w-full h-auto object-cover";
                    }
                    div class="md:w-1/2 text-left" {
                        (paragraphs(&about.paragraphs))
                    }
                }
            }
        }
    }
}

pub fn service_card(service: &ServiceItem) -> Markup {
    html! {
        div class="card text-center" {
            div class="text-5xl text-green-600 mb-4" { (service.icon) }
            h3 class="text-2xl font-semibold mb-3" { (service.name) }
            p class="text-gray-700" { (service.description) }
        }
    }
}

pub fn services_section(services: &ServicesSection, anchor: Option<&str>) -> Markup {
    html! {
        section id=[anchor] class={ "py-16 bg-gray-100 " (SECTION_CLASS) } {
            div class="container mx-auto text-center" {
                h2 class="section-title" { (services.title) }
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for service in &services.items {
                        (service_card(service))
                    }
                }
            }
        }
    }
}

/// Placeholder colour for a portfolio image, stable for a given item name.
pub fn placeholder_color(name: &str) -> String {
    // FNV-1a
    let hash = name
        .bytes()
        .fold(0x811c_9dc5_u32, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193));
    format!("{:06X}", hash & 0x00FF_FFFF)
}

pub fn placeholder_image_url(name: &str) -> String {
    let text: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!(
        "https://placehold.co/600x400/{}/FFFFFF?text={}",
        placeholder_color(name),
        text
    )
}

pub fn portfolio_card(item: &PortfolioItem) -> Markup {
    html! {
        div class="rounded-lg shadow-lg overflow-hidden transform transition duration-300 hover:scale-105" {
            img src=(placeholder_image_url(&item.name)) alt=(item.image_alt) class="w-full h-56 object-cover";
            div class="p-4 bg-white" {
                h3 class="text-xl font-semibold mb-2" { (item.name) }
                p class="text-gray-700" { (item.description) }
            }
        }
    }
}

pub fn portfolio_section(portfolio: &PortfolioSection) -> Markup {
    html! {
        section id="portfolio" class={ "py-16 bg-white " (SECTION_CLASS) } {
            div class="container mx-auto text-center" {
                h2 class="section-title" { (portfolio.title) }
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for item in &portfolio.items {
                        (portfolio_card(item))
                    }
                }
            }
        }
    }
}
