use super::{missing_section, PageRenderer};
use crate::domain::model::{ContactInfo, SiteContent};
use maud::{html, Markup};

pub struct ContactPage;

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn contact_details(info: &ContactInfo) -> Markup {
    html! {
        div class="flex flex-col md:flex-row justify-center items-center space-y-4 md:space-y-0 md:space-x-8 mb-8" {
            p class="text-lg" {
                "📧 E-mail: "
                a href=(format!("mailto:{}", info.email)) class="hover:underline" { (info.email) }
            }
            p class="text-lg" {
                "📞 Telefone: "
                a href=(format!("tel:{}", digits(&info.phone))) class="hover:underline" { (info.phone) }
            }
            p class="text-lg" {
                "📱 WhatsApp: "
                a href=(format!("https://wa.me/55{}", digits(&info.whatsapp))) target="_blank" class="hover:underline" { (info.whatsapp) }
            }
        }
        p class="text-lg mb-8" { "📍 Endereço: " (info.address) }
    }
}

// Submission is not wired anywhere; the form only carries client-side constraints.
fn contact_form() -> Markup {
    html! {
        div class="mt-8" {
            h3 class="text-2xl font-semibold mb-4" { "Envie uma Mensagem" }
            form class="max-w-xl mx-auto space-y-4 contact-form" {
                input type="text" name="name" placeholder="Seu Nome" required;
                input type="email" name="email" placeholder="Seu E-mail" required;
                input type="tel" name="phone" placeholder="Seu Telefone (Opcional)";
                textarea name="message" placeholder="Sua Mensagem" rows="5" required {}
                button type="submit" class="btn-primary" { "Enviar Mensagem" }
            }
        }
    }
}

impl PageRenderer for ContactPage {
    fn render(&self, content: &SiteContent) -> Markup {
        let info = content
            .contact_info
            .as_ref()
            .or_else(|| missing_section("contact", "contactInfo"));

        html! {
            section class="py-16 bg-green-700 text-white rounded-lg shadow-md mx-auto my-12 max-w-6xl p-8" {
                div class="container mx-auto text-center" {
                    h2 class="text-4xl font-bold mb-8" { "Fale Conosco" }
                    p class="text-xl mb-8" { "Entre em contato para solicitar um orçamento ou tirar suas dúvidas." }
                    @if let Some(info) = info {
                        (contact_details(info))
                    }
                    (contact_form())
                }
            }
        }
    }
}
