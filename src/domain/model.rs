use serde::{Deserialize, Serialize};

/// The whole `data.json` document. Every section is optional so that a renderer
/// can skip what is missing instead of failing the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub company_name: Option<String>,
    pub slogan: Option<String>,
    pub hero_section: Option<HeroSection>,
    pub about_company: Option<AboutCompany>,
    pub services: Option<ServicesSection>,
    pub portfolio: Option<PortfolioSection>,
    pub contact_info: Option<ContactInfo>,
    pub about_developer: Option<AboutDeveloper>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutCompany {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image_alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesSection {
    pub title: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceItem {
    pub icon: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioSection {
    pub title: String,
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioItem {
    pub name: String,
    pub description: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutDeveloper {
    pub title: String,
    pub paragraphs: Vec<String>,
}
