use url::Url;

/// A page the site knows how to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Services,
    Contact,
    Team,
    Unknown,
}

impl PageId {
    pub const KNOWN: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Contact,
        PageId::Team,
    ];

    pub fn from_file_name(name: &str) -> Self {
        match name {
            "" | "index.html" => PageId::Home,
            "sobre.html" => PageId::About,
            "servicos.html" => PageId::Services,
            "faleconosco.html" => PageId::Contact,
            "equipe.html" => PageId::Team,
            _ => PageId::Unknown,
        }
    }

    /// Canonical file name of the page, `None` for `Unknown`.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            PageId::Home => Some("index.html"),
            PageId::About => Some("sobre.html"),
            PageId::Services => Some("servicos.html"),
            PageId::Contact => Some("faleconosco.html"),
            PageId::Team => Some("equipe.html"),
            PageId::Unknown => None,
        }
    }
}

/// Trailing path segment of a navigation location. Accepts a full URL or a bare path;
/// query strings and fragments are dropped.
pub fn trailing_segment(location: &str) -> String {
    let path = match Url::parse(location) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    path.rsplit('/').next().unwrap_or_default().to_string()
}

pub fn resolve_current_page(location: &str) -> PageId {
    let page = PageId::from_file_name(&trailing_segment(location));
    tracing::debug!("Resolved location '{}' to {:?}", location, page);
    page
}
