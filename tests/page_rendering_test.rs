use site_populate::core::registry::{dispatch, renderer_for};
use site_populate::core::RenderTarget;
use site_populate::{PageId, SiteContent};

struct Capture(Option<String>);

impl RenderTarget for Capture {
    fn replace_content(&mut self, markup: &str) -> site_populate::Result<()> {
        self.0 = Some(markup.to_string());
        Ok(())
    }
}

fn content() -> SiteContent {
    serde_json::from_value(serde_json::json!({
        "companyName": "Solar Paisagismo",
        "slogan": "Verde que te quero verde",
        "heroSection": {"title": "Jardins para viver", "subtitle": "Projetos sob medida"},
        "aboutCompany": {
            "title": "Quem Somos",
            "paragraphs": ["Primeiro parágrafo.", "Segundo parágrafo.", "Terceiro parágrafo."],
            "imageAlt": "Equipe em campo"
        },
        "services": {
            "title": "O Que Fazemos",
            "items": [
                {"icon": "🌳", "name": "Poda", "description": "Poda de árvores"},
                {"icon": "🌷", "name": "Plantio", "description": "Plantio de flores"},
                {"icon": "💧", "name": "Irrigação", "description": "Sistemas de irrigação"},
                {"icon": "🪨", "name": "Pedras", "description": "Caminhos de pedra"}
            ]
        },
        "portfolio": {
            "title": "Trabalhos",
            "items": [
                {"name": "Jardim Zen", "description": "Casa em Campinas", "imageAlt": "Zen"},
                {"name": "Horta Urbana", "description": "Escola municipal", "imageAlt": "Horta"},
                {"name": "Praça Central", "description": "Prefeitura", "imageAlt": "Praça"}
            ]
        },
        "contactInfo": {
            "email": "contato@solar.com.br",
            "phone": "(11) 3456-7890",
            "whatsapp": "(11) 98765-4321",
            "address": "Rua das Flores, 123 - São Paulo"
        },
        "aboutDeveloper": {
            "title": "Quem Fez Este Site",
            "paragraphs": ["Desenvolvido por um jardineiro digital."]
        }
    }))
    .unwrap()
}

fn render(page: PageId, content: &SiteContent) -> String {
    let mut target = Capture(None);
    assert!(dispatch(page, content, &mut target).unwrap());
    target.0.unwrap()
}

fn assert_in_order(markup: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let position = markup[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' missing or out of order", needle));
        last += position + needle.len();
    }
}

#[test]
fn test_home_page_contains_every_literal_field() {
    let content = content();
    let markup = render(PageId::Home, &content);

    for text in [
        "Jardins para viver",
        "Projetos sob medida",
        "Quem Somos",
        "Equipe em campo",
        "O Que Fazemos",
        "Trabalhos",
        "Casa em Campinas",
    ] {
        assert!(markup.contains(text), "missing '{}'", text);
    }
    assert_in_order(
        &markup,
        &["Primeiro parágrafo.", "Segundo parágrafo.", "Terceiro parágrafo."],
    );
}

#[test]
fn test_service_blocks_match_items_in_order() {
    let content = content();
    let items = &content.services.as_ref().unwrap().items;
    let names: Vec<String> = items.iter().map(|s| format!(">{}</h3>", s.name)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    for page in [PageId::Home, PageId::Services] {
        let markup = render(page, &content);
        assert_eq!(
            markup.matches(r#"<div class="card text-center">"#).count(),
            items.len()
        );
        assert_in_order(&markup, &names);
    }
}

#[test]
fn test_portfolio_blocks_match_items() {
    let content = content();
    let items = &content.portfolio.as_ref().unwrap().items;
    let markup = render(PageId::Home, &content);

    assert_eq!(markup.matches("overflow-hidden transform").count(), items.len());
    assert_in_order(&markup, &["Jardim Zen", "Horta Urbana", "Praça Central"]);
    assert!(markup.contains("text=Jardim+Zen"));
}

#[test]
fn test_about_services_contact_team_pages() {
    let content = content();

    let about = render(PageId::About, &content);
    assert!(about.contains("Quem Somos"));
    assert_eq!(about.matches("leading-relaxed").count(), 3);

    let services = render(PageId::Services, &content);
    assert!(services.contains("O Que Fazemos"));
    assert!(!services.contains("Jardins para viver"));

    let contact = render(PageId::Contact, &content);
    for text in [
        "contato@solar.com.br",
        "(11) 3456-7890",
        "(11) 98765-4321",
        "Rua das Flores, 123 - São Paulo",
    ] {
        assert!(contact.contains(text), "missing '{}'", text);
    }

    let team = render(PageId::Team, &content);
    assert!(team.contains("Quem Fez Este Site"));
    assert!(team.contains("Desenvolvido por um jardineiro digital."));
}

#[test]
fn test_markup_significant_data_is_escaped_everywhere() {
    let payload = "<img src=x onerror=alert(1)>";
    let content: SiteContent = serde_json::from_value(serde_json::json!({
        "heroSection": {"title": payload, "subtitle": payload},
        "aboutCompany": {"title": payload, "paragraphs": [payload], "imageAlt": "\" onload=\"x"},
        "services": {"title": payload, "items": [{"icon": payload, "name": payload, "description": payload}]},
        "portfolio": {"title": payload, "items": [{"name": payload, "description": payload, "imageAlt": payload}]},
        "contactInfo": {"email": payload, "phone": payload, "whatsapp": payload, "address": payload},
        "aboutDeveloper": {"title": payload, "paragraphs": [payload]}
    }))
    .unwrap();

    for page in PageId::KNOWN {
        let markup = render(page, &content);
        assert!(!markup.contains(payload), "{:?} leaked raw markup", page);
        assert!(!markup.contains("\" onload=\""), "{:?} leaked an attribute", page);
    }
}

#[test]
fn test_empty_document_renders_without_panicking() {
    let content = SiteContent::default();
    for page in PageId::KNOWN {
        let _ = render(page, &content);
    }
    assert!(renderer_for(PageId::Unknown).is_none());
}
